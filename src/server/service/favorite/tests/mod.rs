use holocron_test_utils::prelude::*;
