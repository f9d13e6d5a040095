use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header,
    Error, HttpMessage,
};
use entity::EmployeeRole;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;

use crate::utils::jwt::verify_jwt_token;

/// Identity attached to the request once the bearer token checks out.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub role: EmployeeRole,
}

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer "));

            match auth_header {
                Some(token) => match verify_jwt_token(token) {
                    Ok(claims) => {
                        let user_id: i32 = claims
                            .sub
                            .parse()
                            .map_err(|_| ErrorUnauthorized("Invalid token subject"))?;
                        req.extensions_mut().insert(AuthenticatedUser {
                            id: user_id,
                            role: claims.role,
                        });
                        let res = svc.call(req).await?;
                        Ok(res)
                    }
                    Err(_) => Err(ErrorUnauthorized("Invalid token")),
                },
                None => Err(ErrorUnauthorized("Missing authorization header")),
            }
        })
    }
}
