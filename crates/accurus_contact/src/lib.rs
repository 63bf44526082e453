// --- File: crates/accurus_contact/src/lib.rs ---
pub mod doc;
pub mod error;
pub mod faq;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_test;
pub mod models;
pub mod routes;
pub mod schedule;
#[cfg(test)]
mod schedule_proptest;

pub use error::{ContactError, SubmitError};
pub use faq::{FaqItem, FaqPanel, FAQS};
pub use logic::{build_template_params, ContactForm, PendingSubmissions, SubmitReceipt};
pub use models::{ContactMethod, ContactSubmission, FormField};
pub use schedule::{date_bounds, generate_time_slots, DateBounds, TimeSlot};
