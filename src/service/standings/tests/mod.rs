mod compute_group_standings;

use pavilion_test_utils::prelude::*;

use super::*;
