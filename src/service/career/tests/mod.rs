
use pavilion_test_utils::prelude::*;

use super::*;
