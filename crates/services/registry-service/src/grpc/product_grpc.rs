//! gRPC implementation for `product.v1.ProductService`.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use domain::{CreateProduct, SearchProductsQuery};
use proto::product::{
    product_service_server::ProductService as ProductServiceProto, CreateProductRequest,
    CreateProductResponse, GetProductRequest, GetProductResponse, SearchProductsRequest,
    SearchProductsResponse,
};

use super::{require_id, to_status};
use crate::service::ProductService;

/// gRPC service wrapper for ProductService.
pub struct ProductGrpcService {
    service: Arc<dyn ProductService>,
}

impl ProductGrpcService {
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl ProductServiceProto for ProductGrpcService {
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<CreateProductResponse>, Status> {
        let req = request.into_inner();

        let product = self
            .service
            .create_product(CreateProduct {
                name: req.name,
                description: req.description,
                price: req.price,
                quantity: req.quantity,
                category: req.category,
            })
            .map_err(to_status)?;

        Ok(Response::new(CreateProductResponse {
            product: Some(product_to_proto(&product)),
            message: "Product created successfully".to_string(),
        }))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<GetProductResponse>, Status> {
        let req = request.into_inner();
        require_id(&req.id)?;

        let product = self.service.get_product(&req.id).map_err(to_status)?;

        Ok(Response::new(GetProductResponse {
            product: Some(product_to_proto(&product)),
            message: "Product retrieved successfully".to_string(),
        }))
    }

    async fn search_products(
        &self,
        request: Request<SearchProductsRequest>,
    ) -> Result<Response<SearchProductsResponse>, Status> {
        let req = request.into_inner();

        let page = self
            .service
            .search_products(SearchProductsQuery {
                query: req.query,
                category: req.category,
                min_price: req.min_price,
                max_price: req.max_price,
                page: req.page,
                page_size: req.page_size,
            })
            .map_err(to_status)?;

        Ok(Response::new(SearchProductsResponse {
            products: page.items.iter().map(product_to_proto).collect(),
            total_count: page.total,
            page: page.page,
            page_size: page.page_size,
        }))
    }
}

/// Convert domain Product to its wire form.
fn product_to_proto(product: &domain::Product) -> proto::product::Product {
    proto::product::Product {
        id: product.id.clone(),
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        quantity: product.quantity,
        category: product.category.clone(),
        created_at: product.created_at.to_rfc3339(),
        updated_at: product.updated_at.to_rfc3339(),
    }
}
