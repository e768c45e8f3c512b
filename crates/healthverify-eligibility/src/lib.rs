//! # healthverify-eligibility
//!
//! A TOML-configured eligibility and cost-estimation engine.
//!
//! ## Overview
//!
//! This crate provides [`EligibilityEngine`], which implements the
//! [`EligibilityPolicy`](healthverify_core::traits::EligibilityPolicy)
//! trait.  A rule file lists, per citizenship class, which services are
//! free, reduced-fee, or full-fee, plus a price table.  Anything not listed
//! falls through to manual review and is priced in full.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use healthverify_core::traits::EligibilityPolicy;
//! use healthverify_eligibility::EligibilityEngine;
//!
//! let engine = EligibilityEngine::builtin()?;
//! let estimate = engine.estimate_cost(&services, "citizen");
//! ```
//!
//! Configuration is loaded once at startup and never changes afterwards.

pub mod config;
pub mod engine;

pub use config::{ClassRules, EligibilityConfig, BUILTIN_RULES};
pub use engine::EligibilityEngine;

// ── Tests ─────────────────────────────────────────────────────────────────────
