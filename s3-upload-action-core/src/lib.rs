#![doc = "s3-upload-action-core: core logic library for s3-upload-action."]

//! This crate contains the action entry point and the capability seams it is built from.
//! The CLI crate only wires real implementations of these seams together.
//!
//! # Usage
//! Call [`action::run_action`] with a [`inputs::ConfigReader`], an [`exec::CommandRunner`]
//! and a [`notice::Notifier`]. Mocks for all three are exported behind the
//! `test-export-mocks` feature.

pub mod action;
pub mod error;
pub mod exec;
pub mod inputs;
pub mod notice;
pub mod platform;
pub mod storage;
