//! # Problems shared by the unit tests.
//!
//! Convention for function names:
//!
//! * `fn create_data()`
//! * `fn standard_form()`
//! * `fn tableau_form()`
