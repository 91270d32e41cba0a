//! Integration tests for the Hackpack project generator

mod cli_commands;
mod generation_flow;
mod test_utils;
