use anyhow::{Context, Result};
use chrono::NaiveDate;
use ilr_core::{LearnerBuilder, LearningDeliveryBuilder, Submission};
use tracing::info;

use crate::output;

pub fn execute(output_path: Option<&str>, ukprn: i64) -> Result<()> {
    info!("Scaffolding submission skeleton for UKPRN {}", ukprn);

    let start_date: NaiveDate = "2021-09-06".parse()?;
    let date_of_birth: NaiveDate = "1994-02-11".parse()?;

    let submission = Submission {
        ukprn,
        learners: vec![
            LearnerBuilder::new("A10001")
                .date_of_birth(date_of_birth)
                .prior_attain(3)
                .delivery(
                    LearningDeliveryBuilder::new("60142861")
                        .aim_type(3)
                        .aim_seq_number(1)
                        .fund_model(35)
                        .learn_start_date(start_date)
                        .fam("SOF", "105")
                        .build(),
                )
                .build(),
        ],
    };

    let rendered =
        serde_yaml_ng::to_string(&submission).context("Failed to render submission skeleton")?;

    match output_path {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write skeleton to {path}"))?;
            output::print_success(&format!("Submission skeleton written to {path}"));
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
