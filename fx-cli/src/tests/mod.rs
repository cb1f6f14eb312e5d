
use assertables::*;
use fx_core::prelude::*;
use fx_testutils::*;
use rstest::*;
use tracing_test::traced_test;

use super::*;
