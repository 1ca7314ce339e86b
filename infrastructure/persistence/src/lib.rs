pub mod db;
pub mod stock {
    pub mod entity;
    pub mod source;
}
