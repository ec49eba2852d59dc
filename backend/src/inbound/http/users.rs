//! User registration handler.
//!
//! ```text
//! POST /usuarios {"nombre":"Juan","telefono":"123456789","direccion":"Calle 123",
//!                 "cedula":"12345678","correo":"juan@example.com"}
//! ```
//!
//! The body is decoded by hand rather than through `web::Json` so that a
//! payload which is not JSON, or has no JSON content type, still receives the
//! envelope-shaped 400 response.

use actix_web::{HttpResponse, post, web};
use serde::de::Error as _;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{Error, NewUserDetails};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::state::HttpState;

pub const MALFORMED_PAYLOAD_MESSAGE: &str = "malformed JSON payload";
pub const USER_CREATED_MESSAGE: &str = "user created successfully";

/// Registration request body for `POST /usuarios`.
///
/// Decoding is lenient in the same ways throughout:
/// - only the first JSON value in the body is read;
/// - a `null` body, or an absent or `null` field, leaves the field empty;
/// - keys match regardless of ASCII case, an exact match taking precedence;
/// - unknown keys are ignored.
///
/// Empty fields are rejected by the service, not here.
#[derive(Debug, Default, PartialEq, Eq, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Juan")]
    pub nombre: Option<String>,
    #[schema(example = "123456789")]
    pub telefono: Option<String>,
    #[schema(example = "Calle 123")]
    pub direccion: Option<String>,
    #[schema(example = "12345678")]
    pub cedula: Option<String>,
    #[schema(example = "juan@example.com")]
    pub correo: Option<String>,
}

impl CreateUserRequest {
    /// Decode the leading JSON value of `body`.
    ///
    /// # Errors
    ///
    /// Fails when the body is empty, the leading value is not an object or
    /// `null`, or a known field holds something other than a string.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut values =
            serde_json::Deserializer::from_slice(body).into_iter::<Option<Map<String, Value>>>();
        let fields = match values.next() {
            Some(first) => first?.unwrap_or_default(),
            None => return Err(serde_json::Error::custom("request body is empty")),
        };

        Ok(Self {
            nombre: text_field(&fields, "nombre")?,
            telefono: text_field(&fields, "telefono")?,
            direccion: text_field(&fields, "direccion")?,
            cedula: text_field(&fields, "cedula")?,
            correo: text_field(&fields, "correo")?,
        })
    }
}

fn text_field(fields: &Map<String, Value>, name: &str) -> Result<Option<String>, serde_json::Error> {
    let value = fields.get(name).or_else(|| {
        fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    });

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(serde_json::Error::custom(format!(
            "field `{name}` must be a string"
        ))),
    }
}

impl From<CreateUserRequest> for NewUserDetails {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            name: value.nombre.unwrap_or_default(),
            phone: value.telefono.unwrap_or_default(),
            address: value.direccion.unwrap_or_default(),
            national_id: value.cedula.unwrap_or_default(),
            email: value.correo.unwrap_or_default(),
        }
    }
}

/// Register a new user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::inbound::http::users::create_user;
///
/// let app = App::new().service(create_user);
/// ```
#[utoipa::path(
    post,
    path = "/usuarios",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse),
        (status = 400, description = "Malformed JSON payload", body = ApiResponse),
        (status = 409, description = "Validation failure, duplicate user, or store failure", body = ApiResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/usuarios")]
pub async fn create_user(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let request = CreateUserRequest::from_body(&body).map_err(|err| {
        debug!(error = %err, "registration payload rejected");
        Error::malformed_request(MALFORMED_PAYLOAD_MESSAGE)
    })?;

    let user = state.registration.create_user(request.into()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(USER_CREATED_MESSAGE, user)))
}
