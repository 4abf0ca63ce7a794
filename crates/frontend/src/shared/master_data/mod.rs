//! Generic List/New/Edit engine shared by every master-data page.
//!
//! The URL decides the mode, the store holds the fetched collection, and
//! one ordered view per render feeds the table, the paginator and the
//! record navigator alike.

pub mod api;
pub mod config;
pub mod dirty;
pub mod error;
pub mod form;
pub mod gateway;
pub mod mode;
pub mod navigator;
pub mod paginator;
pub mod pipeline;
pub mod state;
pub mod store;
pub mod toast;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{
    AfterSave, AppConfig, CellFormat, Column, DetailTab, EntityConfig, FieldKind, FormField,
};
pub use error::{ApiError, SaveError, ValidationErrors};
pub use form::FormValues;
pub use gateway::{Confirm, MutationGateway, SaveAction};
pub use mode::{Mode, ModeRouter, Navigate};
pub use state::{PageState, StateHandle};
pub use toast::{Notify, ToastKind};
pub use view::{SearchScope, SortDirection};
