mod entry;

use region_metrics::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
