use bigdecimal::BigDecimal;
use serde::Deserialize;
use uuid::Uuid;

use business::domain::stock::model::UpstreamProduct;
use business::domain::stock::page::Page;
use business::domain::stock::value_objects::PageRequest;

/// Product as served by `GET /products/{id}`.
#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    #[serde(rename = "stockQuantity")]
    pub quantity_in_stock: Option<i32>,
}

impl ProductDto {
    pub fn into_domain(self) -> UpstreamProduct {
        UpstreamProduct {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            quantity_in_stock: self.quantity_in_stock,
        }
    }
}

/// Paged collection as served by `GET /products?page=&size=`.
///
/// Every field is optional on the wire; gaps are filled from the request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponseDto<T> {
    pub content: Option<Vec<T>>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub total_elements: Option<u64>,
    pub total_pages: Option<u32>,
    pub first: Option<bool>,
    pub last: Option<bool>,
}

impl PageResponseDto<ProductDto> {
    /// A missing `last` flag ends traversal: it is the only termination
    /// signal and guessing `false` could loop forever.
    pub fn into_domain(self, request: PageRequest) -> Page<UpstreamProduct> {
        let page = self.page.unwrap_or(request.page());

        Page {
            content: self
                .content
                .unwrap_or_default()
                .into_iter()
                .map(ProductDto::into_domain)
                .collect(),
            page,
            size: self.size.unwrap_or(request.size()),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            is_first: self.first.unwrap_or(page == 0),
            is_last: self.last.unwrap_or(true),
        }
    }
}
