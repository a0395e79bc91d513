//! Messages of the `product.v1` package.

/// A product as sent over the wire. Timestamps are RFC 3339 strings.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Product {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(double, tag = "4")]
    pub price: f64,
    #[prost(int32, tag = "5")]
    pub quantity: i32,
    #[prost(string, tag = "6")]
    pub category: String,
    #[prost(string, tag = "7")]
    pub created_at: String,
    #[prost(string, tag = "8")]
    pub updated_at: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProductRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(double, tag = "3")]
    pub price: f64,
    #[prost(int32, tag = "4")]
    pub quantity: i32,
    #[prost(string, tag = "5")]
    pub category: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProductResponse {
    #[prost(message, optional, tag = "1")]
    pub product: Option<Product>,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductResponse {
    #[prost(message, optional, tag = "1")]
    pub product: Option<Product>,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchProductsRequest {
    #[prost(string, optional, tag = "1")]
    pub query: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub category: Option<String>,
    #[prost(double, optional, tag = "3")]
    pub min_price: Option<f64>,
    #[prost(double, optional, tag = "4")]
    pub max_price: Option<f64>,
    #[prost(int32, tag = "5")]
    pub page: i32,
    #[prost(int32, tag = "6")]
    pub page_size: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchProductsResponse {
    #[prost(message, repeated, tag = "1")]
    pub products: Vec<Product>,
    #[prost(int32, tag = "2")]
    pub total_count: i32,
    #[prost(int32, tag = "3")]
    pub page: i32,
    #[prost(int32, tag = "4")]
    pub page_size: i32,
}

include!(concat!(env!("OUT_DIR"), "/product.v1.ProductService.rs"));
