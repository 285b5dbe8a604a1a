use crate::{
    abstract_trait::{
        auth::DynAuthApiClient, car::DynCarApiClient, rental::DynRentalApiClient,
    },
    service::{ApiClient, AuthApiService, CarApiService, RentalApiService},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_client: DynAuthApiClient,
    pub car_client: DynCarApiClient,
    pub rental_client: DynRentalApiClient,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_client", &"<AuthApiService>")
            .field("car_client", &"<CarApiService>")
            .field("rental_client", &"<RentalApiService>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(api: ApiClient) -> Self {
        let auth_client = Arc::new(AuthApiService::new(api.clone())) as DynAuthApiClient;
        let car_client = Arc::new(CarApiService::new(api.clone())) as DynCarApiClient;
        let rental_client = Arc::new(RentalApiService::new(api)) as DynRentalApiClient;

        Self {
            auth_client,
            car_client,
            rental_client,
        }
    }
}
