//! Poker game primitives.
//!
//! This module provides:
//! - Cards, suits and values, with token parsing
//! - Actions, bet history entries and decision points
//! - Hand classification over 5 to 7 cards

pub mod entities;
pub mod functional;
