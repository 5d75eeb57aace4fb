// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod operation_tests;
pub mod validate_tests;
pub mod result_tests;
