//! Integration tests for socialq

mod cli_binary;
mod enrollment_files;
mod queue_contract;
mod test_utils;
