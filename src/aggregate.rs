//! Resampling of a daily `date`-keyed table into day/week/month buckets.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{Result, SearchConsoleError};
use crate::models::{Interval, MetricRecord, NormalizedTable, TrendBucket};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Bucket a table keyed only by `date`.
///
/// `Day` keeps one bucket per row. `Week` groups on the Monday of the ISO
/// week and `Month` on the first of the month; both sum clicks and
/// impressions and take the unweighted mean of ctr and position. Output is
/// ascending by bucket start.
pub fn aggregate(table: &NormalizedTable, interval: Interval) -> Result<Vec<TrendBucket>> {
    let mut dated = table
        .records
        .iter()
        .map(|r| Ok((record_date(r)?, r)))
        .collect::<Result<Vec<_>>>()?;

    if interval == Interval::Day {
        dated.sort_by_key(|(date, _)| *date);
        return Ok(dated
            .into_iter()
            .map(|(date, r)| TrendBucket {
                start: date,
                clicks: r.clicks,
                impressions: r.impressions,
                ctr: r.ctr,
                position: r.position,
            })
            .collect());
    }

    let mut groups: BTreeMap<NaiveDate, Accumulator> = BTreeMap::new();
    for (date, r) in dated {
        groups.entry(bucket_start(date, interval)).or_default().add(r);
    }

    Ok(groups
        .into_iter()
        .map(|(start, acc)| acc.finish(start))
        .collect())
}

/// Start date of the bucket containing `date`.
pub fn bucket_start(date: NaiveDate, interval: Interval) -> NaiveDate {
    match interval {
        Interval::Day => date,
        Interval::Week => {
            let offset = u64::from(date.weekday().num_days_from_monday());
            date.checked_sub_days(Days::new(offset)).unwrap_or(date)
        }
        Interval::Month => date.with_day(1).unwrap_or(date),
    }
}

fn record_date(record: &MetricRecord) -> Result<NaiveDate> {
    let raw = match record.keys.first() {
        Some(Some(value)) => value,
        _ => return Err(SearchConsoleError::InvalidDate("row has no date value".to_string())),
    };
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| SearchConsoleError::InvalidDate(format!("{:?}: {}", raw, e)))
}

#[derive(Default)]
struct Accumulator {
    rows: u32,
    clicks: u64,
    impressions: u64,
    ctr_sum: f64,
    position_sum: f64,
}

impl Accumulator {
    fn add(&mut self, record: &MetricRecord) {
        self.rows += 1;
        self.clicks += record.clicks;
        self.impressions += record.impressions;
        self.ctr_sum += record.ctr;
        self.position_sum += record.position;
    }

    fn finish(self, start: NaiveDate) -> TrendBucket {
        let n = f64::from(self.rows.max(1));
        TrendBucket {
            start,
            clicks: self.clicks,
            impressions: self.impressions,
            ctr: self.ctr_sum / n,
            position: self.position_sum / n,
        }
    }
}
