//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the registration endpoint, the health checks, and the
//! envelope, user, and request schemas. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::User;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "Registers users whose national ID and email are unique."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ApiResponse, User, CreateUserRequest)),
    tags(
        (name = "users", description = "User registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        match components.schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected object schema for {name}"),
        }
    }

    #[rstest]
    #[case("ApiResponse", &["success", "message", "data"])]
    #[case("User", &["id", "nombre", "telefono", "direccion", "cedula", "correo"])]
    #[case("CreateUserRequest", &["nombre", "telefono", "direccion", "cedula", "correo"])]
    fn schema_exposes_wire_fields(#[case] name: &str, #[case] expected: &[&str]) {
        let fields = schema_fields(name);
        for field in expected {
            assert!(
                fields.iter().any(|f| f == field),
                "{name} should have field '{field}'"
            );
        }
    }

    #[test]
    fn registration_path_is_documented() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/usuarios").expect("path registered");
        assert!(item.post.is_some(), "POST /usuarios should be documented");
    }
}
