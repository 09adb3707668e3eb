pub mod constants;
mod context;
mod header_builder;
mod headers;
mod max_age;
mod options;
mod origin;
mod policy;
mod result;
pub mod service;
mod settings;

pub use context::RequestContext;
pub use headers::{HeaderWriter, Headers};
pub use max_age::MaxAge;
pub use options::CorsOptions;
pub use origin::{Origin, OriginDecision, OriginMatcher, OriginPredicateFn, PatternError};
pub use policy::CorsPolicy;
pub use result::{CorsDecision, PreflightResult, SimpleResult};
pub use service::{Cors, CorsLayer};
pub use settings::{CorsSettings, MaxAgeSetting, OriginEntrySetting, OriginSetting, SettingsError};
