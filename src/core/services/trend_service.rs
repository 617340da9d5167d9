//! Rolling monthly in/out series and their quarterly or yearly roll-ups.

use chrono::NaiveDate;

use crate::domain::{
    Granularity, Transaction, TransactionKind, TrendBucket, TrendSeries, YearMonth,
};

pub struct TrendService;

impl TrendService {
    /// `window_months` monthly buckets ending with the month of `reference_date`, oldest first.
    pub fn compute_trend(
        transactions: &[Transaction],
        reference_date: NaiveDate,
        window_months: u32,
    ) -> TrendSeries {
        let last = YearMonth::containing(reference_date);
        let months = i32::try_from(window_months).unwrap_or(i32::MAX);
        let Some(first) = (months > 0).then(|| last.offset(1 - months)).flatten() else {
            if months > 0 {
                tracing::warn!(
                    reference = %reference_date,
                    window_months,
                    "trend window starts before the supported calendar; returning empty series"
                );
            }
            return TrendSeries {
                granularity: Granularity::Month,
                buckets: Vec::new(),
            };
        };

        let mut buckets: Vec<TrendBucket> = (0..months)
            .filter_map(|step| first.offset(step))
            .map(|month| TrendBucket {
                period_key: Granularity::Month.key_for(month),
                start: month.first_day(),
                end: month.last_day(),
                inflow: Default::default(),
                outflow: Default::default(),
            })
            .collect();

        if let (Some(window_start), Some(window_end)) = (
            buckets.first().map(|bucket| bucket.start),
            buckets.last().map(|bucket| bucket.end),
        ) {
            for txn in transactions {
                if txn.date < window_start || txn.date > window_end {
                    continue;
                }
                let idx = month_index(first, YearMonth::containing(txn.date));
                let Some(bucket) = buckets.get_mut(idx) else {
                    continue;
                };
                match txn.kind {
                    TransactionKind::Inflow => bucket.inflow += txn.amount,
                    TransactionKind::Outflow => bucket.outflow += txn.amount,
                }
            }
        }

        tracing::debug!(
            reference = %reference_date,
            window_months,
            "trend series computed"
        );
        TrendSeries {
            granularity: Granularity::Month,
            buckets,
        }
    }

    /// Groups a monthly series into coarser buckets by summing its months.
    pub fn rebucket(series: &TrendSeries, granularity: Granularity) -> TrendSeries {
        let mut buckets: Vec<TrendBucket> = Vec::new();
        for month in &series.buckets {
            let key = granularity.key_for(YearMonth::containing(month.start));
            match buckets.last_mut() {
                Some(current) if current.period_key == key => {
                    current.end = month.end;
                    current.inflow += month.inflow;
                    current.outflow += month.outflow;
                }
                _ => buckets.push(TrendBucket {
                    period_key: key,
                    ..month.clone()
                }),
            }
        }
        TrendSeries {
            granularity,
            buckets,
        }
    }
}

fn month_index(first: YearMonth, month: YearMonth) -> usize {
    let months = |ym: YearMonth| i64::from(ym.year()) * 12 + i64::from(ym.month());
    usize::try_from(months(month) - months(first)).unwrap_or(0)
}
