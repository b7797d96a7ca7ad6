//! The OpenAPI 3 document model.
//!
//! Every type here keeps the nodes its fields were read from, so the diff
//! engine can report changes against source positions.

mod components;
mod document;
mod info;
mod oauth_flows;
mod security_scheme;
mod server;
mod tag;

pub use components::Components;
pub use document::{Document, create_document, create_document_with_options};
pub use info::{Contact, Info, License};
pub use oauth_flows::{OAuthFlow, OAuthFlows};
pub use security_scheme::SecurityScheme;
pub use server::{Server, ServerVariable};
pub use tag::{ExternalDoc, Tag};

pub const OPENAPI_LABEL: &str = "openapi";
pub const INFO_LABEL: &str = "info";
pub const SERVERS_LABEL: &str = "servers";
pub const TAGS_LABEL: &str = "tags";
pub const COMPONENTS_LABEL: &str = "components";

pub const TITLE_LABEL: &str = "title";
pub const DESCRIPTION_LABEL: &str = "description";
pub const TERMS_OF_SERVICE_LABEL: &str = "termsOfService";
pub const CONTACT_LABEL: &str = "contact";
pub const LICENSE_LABEL: &str = "license";
pub const VERSION_LABEL: &str = "version";
pub const NAME_LABEL: &str = "name";
pub const URL_LABEL: &str = "url";
pub const EMAIL_LABEL: &str = "email";

pub const EXTERNAL_DOCS_LABEL: &str = "externalDocs";

pub const VARIABLES_LABEL: &str = "variables";
pub const ENUM_LABEL: &str = "enum";
pub const DEFAULT_LABEL: &str = "default";

pub const SECURITY_SCHEMES_LABEL: &str = "securitySchemes";
pub const TYPE_LABEL: &str = "type";
pub const IN_LABEL: &str = "in";
pub const SCHEME_LABEL: &str = "scheme";
pub const BEARER_FORMAT_LABEL: &str = "bearerFormat";
pub const FLOWS_LABEL: &str = "flows";
pub const OPEN_ID_CONNECT_URL_LABEL: &str = "openIdConnectUrl";

pub const IMPLICIT_LABEL: &str = "implicit";
pub const PASSWORD_LABEL: &str = "password";
pub const CLIENT_CREDENTIALS_LABEL: &str = "clientCredentials";
pub const AUTHORIZATION_CODE_LABEL: &str = "authorizationCode";
pub const AUTHORIZATION_URL_LABEL: &str = "authorizationUrl";
pub const TOKEN_URL_LABEL: &str = "tokenUrl";
pub const REFRESH_URL_LABEL: &str = "refreshUrl";
pub const SCOPES_LABEL: &str = "scopes";
