//! Aerodynamic models.
//!
//! This module contains models for aircraft propulsors and related components.

pub mod propeller;
