mod record_champion_if_needed;

use pavilion_test_utils::prelude::*;

use super::*;
