mod client_test;

use fx_testutils::*;
use rstest::*;
use tracing_test::traced_test;

use crate::errors::*;
use crate::prelude::*;
