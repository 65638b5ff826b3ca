use std::sync::Arc;

use tonic::{Request, Response, Status};

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::product::dto::into_props;
use crate::product::error_mapper::{IntoStatus, missing_product};
use crate::proto::product_service_server::ProductService;
use crate::proto::{
    CreateProductRequest, DeleteProductRequest, GetAllProductRequest, GetAllProductResponse,
    GetProductRequest, Product, UpdateProductRequest,
};

/// gRPC service that decodes requests, runs the matching use case and
/// encodes the outcome. It holds no state of its own.
#[derive(Clone)]
pub struct ProductGrpcService {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductGrpcService {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }

    /// Wires every use case against one repository and logger.
    pub fn from_repository(
        repository: Arc<dyn ProductRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl { repository, logger }),
        )
    }
}

#[tonic::async_trait]
impl ProductService for ProductGrpcService {
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<Product>, Status> {
        let product = request.into_inner().product.ok_or_else(missing_product)?;

        let created = self
            .create_use_case
            .execute(CreateProductParams {
                props: into_props(product),
            })
            .await
            .map_err(IntoStatus::into_status)?;

        Ok(Response::new(created.into()))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<Product>, Status> {
        let product = self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: request.into_inner().id,
            })
            .await
            .map_err(IntoStatus::into_status)?;

        Ok(Response::new(product.into()))
    }

    async fn get_all_product(
        &self,
        _request: Request<GetAllProductRequest>,
    ) -> Result<Response<GetAllProductResponse>, Status> {
        let products = self
            .get_all_use_case
            .execute()
            .await
            .map_err(IntoStatus::into_status)?;

        Ok(Response::new(GetAllProductResponse {
            products: products.into_iter().map(Into::into).collect(),
        }))
    }

    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<Product>, Status> {
        let mut product = request.into_inner().product.ok_or_else(missing_product)?;
        let id = std::mem::take(&mut product.id);

        let updated = self
            .update_use_case
            .execute(UpdateProductParams {
                id,
                props: into_props(product),
            })
            .await
            .map_err(IntoStatus::into_status)?;

        Ok(Response::new(updated.into()))
    }

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<Product>, Status> {
        let deleted = self
            .delete_use_case
            .execute(DeleteProductParams {
                id: request.into_inner().id,
            })
            .await
            .map_err(IntoStatus::into_status)?;

        Ok(Response::new(deleted.into()))
    }
}
