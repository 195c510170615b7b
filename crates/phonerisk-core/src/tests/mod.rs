//! Tests for validation and scoring.

mod validator;
