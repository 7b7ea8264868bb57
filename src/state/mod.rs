//! Page-local state machines.
//!
//! Each submodule owns one independent piece of presentation state:
//! - [`NavState`] - navigation bar cursor and collapsed-menu toggle
//! - [`ScrollState`] - eased viewport scroll offset
//! - [`Toast`] - transient notification overlay
//! - [`ContactForm`] - contact page form fields and editing focus
//! - [`WorkState`] - case study expand/collapse selection
//!
//! None of these hold a reference to the current page; the `App` owns
//! that single source of truth and threads it through where needed.

mod contact;
mod nav;
mod scroll;
mod toast;
mod work;

pub use contact::{ContactForm, Field, SubmitOutcome};
pub use nav::NavState;
pub use scroll::ScrollState;
pub use toast::Toast;
pub use work::WorkState;
