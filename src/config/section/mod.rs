//! Configuration section definitions.
//!
//! Each module corresponds to a section in `spritestudio.toml`:
//!
//! | Module     | TOML Section             | Purpose                          |
//! |------------|--------------------------|----------------------------------|
//! | `api`      | `[api]`                  | CORS relay, request timeout      |
//! | `ui`       | `[ui]`                   | Size limits, view mode defaults  |
//! | `features` | `[features]`, `[dev]`    | Demo sprite, a11y, instrumentation |

mod api;
mod features;
mod ui;

pub use api::ApiConfig;
#[cfg(test)]
pub use api::DEFAULT_CORS_PROXY;
pub use features::{DevConfig, FeaturesConfig};
pub use ui::UiConfig;
