pub mod application {
    pub mod stock {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_page;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod stock {
        pub mod errors;
        pub mod mapper;
        pub mod model;
        pub mod page;
        pub mod source;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_page;
        }
    }
}
