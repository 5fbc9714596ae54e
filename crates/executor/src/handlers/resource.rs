//! Integer resource command handlers.
//!
//! This module implements handlers for the lifecycle commands:
//! - Create: Validate, generate, assemble state
//! - Read: Return state verbatim
//! - Update: Return prior state verbatim
//! - Delete: Drop state
//! - Import: Decode an identifier
//! - Plan: Diff prior against desired

use randint_core::{IntegerRequest, IntegerResource};
use randint_engine::IntegerController;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle Create command.
pub fn create(c: &IntegerController, request: IntegerRequest) -> Result<Output> {
    let state = convert_result(c.create(&request))?;
    Ok(Output::State(state))
}

/// Handle Read command.
pub fn read(c: &IntegerController, state: IntegerResource) -> Result<Output> {
    Ok(Output::State(c.read(state)))
}

/// Handle Update command.
pub fn update(
    c: &IntegerController,
    prior: IntegerResource,
    desired: IntegerRequest,
) -> Result<Output> {
    Ok(Output::State(c.update(prior, &desired)))
}

/// Handle Delete command.
pub fn delete(c: &IntegerController, state: IntegerResource) -> Result<Output> {
    c.delete(state);
    Ok(Output::Removed)
}

/// Handle Import command.
pub fn import(c: &IntegerController, id: String) -> Result<Output> {
    let state = convert_result(c.import(&id))?;
    Ok(Output::State(state))
}

/// Handle Plan command.
pub fn plan(
    c: &IntegerController,
    prior: Option<IntegerResource>,
    desired: IntegerRequest,
) -> Result<Output> {
    Ok(Output::Plan(c.plan(prior.as_ref(), &desired)))
}
