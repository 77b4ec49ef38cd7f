//! 格式化時辰時間範圍相關功能
//!
//! 平文時間範圍與帶日期的完整範圍皆自 [`Branch::start_hour`] 與
//! [`Branch::end_hour`] 導出，兩種寫法不致分歧。

use super::{ALL_BRANCHES, Branch};
use crate::date::CivilDate;

/// 時辰的時間範圍文本，格式 `"HH:00-HH:59"`。
///
/// # 用例
///
/// ```
/// use duhorilo::Branch;
/// use duhorilo::branch::fmt;
///
/// assert_eq!("11:00-12:59", fmt::time_range(Branch::Wu));
/// assert_eq!("23:00-00:59", fmt::time_range(Branch::Zi));
/// ```
pub fn time_range(branch: Branch) -> String {
    format!("{:02}:00-{:02}:59", branch.start_hour(), branch.end_hour())
}

/// 時辰在特定日期下的完整日期時間範圍。
///
/// 子時跨午夜，起點為前一日 23:00，終點為當日 00:59；其餘時辰起迄同日。
///
/// # 用例
///
/// ```
/// use duhorilo::{Branch, CivilDate};
/// use duhorilo::branch::fmt;
///
/// let date = CivilDate::new(2024, 11, 14).unwrap();
/// assert_eq!("(11/13 23:00 - 11/14 00:59)", fmt::date_time_range(Branch::Zi, date));
/// assert_eq!("(11/14 11:00 - 11/14 12:59)", fmt::date_time_range(Branch::Wu, date));
/// ```
pub fn date_time_range(branch: Branch, date: CivilDate) -> String {
    let start_date = if branch.spans_midnight() {
        date.prev_day()
    } else {
        date
    };
    format!(
        "({}/{} {:02}:00 - {}/{} {:02}:59)",
        start_date.month(),
        start_date.day(),
        branch.start_hour(),
        date.month(),
        date.day(),
        branch.end_hour(),
    )
}

/// 時辰的顯示名：「X時」加時間範圍，給定日期時採完整日期時間範圍。
///
/// # 用例
///
/// ```
/// use duhorilo::Branch;
/// use duhorilo::branch::fmt;
///
/// assert_eq!("午時 (11:00-12:59)", fmt::label(Branch::Wu, None));
/// ```
pub fn label(branch: Branch, date: Option<CivilDate>) -> String {
    match date {
        Some(date) => format!("{}時 {}", branch.name(), date_time_range(branch, date)),
        None => format!("{}時 ({})", branch.name(), time_range(branch)),
    }
}

/// 時辰選項，用於選單。
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BranchOption {
    /// 選項值，即地支名
    pub value: &'static str,
    /// 顯示名
    pub label: String,
    /// 時辰序號
    pub index: usize,
}

/// 取得全部十二時辰選項，依序號排列，不增不減。
///
/// 給定日期時顯示名採完整日期時間範圍，否則僅示時間範圍。
///
/// # 用例
///
/// ```
/// use duhorilo::branch::fmt;
///
/// let options = fmt::options(None);
/// assert_eq!(12, options.len());
/// assert_eq!("子", options[0].value);
/// assert_eq!("子時 (23:00-00:59)", options[0].label);
/// ```
pub fn options(date: Option<CivilDate>) -> Vec<BranchOption> {
    ALL_BRANCHES
        .into_iter()
        .map(|branch| BranchOption {
            value: branch.name(),
            label: label(branch, date),
            index: branch.index(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockTime;

    #[test]
    fn ranges() {
        for (std, branch) in [
            ("23:00-00:59", Branch::Zi),
            ("01:00-02:59", Branch::Chou),
            ("11:00-12:59", Branch::Wu),
            ("21:00-22:59", Branch::Hai),
        ] {
            assert_eq!(std, time_range(branch));
        }
    }

    #[test]
    fn range_boundaries_map_back() {
        for branch in ALL_BRANCHES {
            for hour in [branch.start_hour(), branch.end_hour()] {
                let time = ClockTime::new(hour, 0).unwrap();
                assert_eq!(branch, Branch::of_time(time), "{}時 {hour:02}:00", branch.name());
            }
        }
    }

    #[test]
    fn dated_ranges() {
        let date = CivilDate::new(2024, 11, 14).unwrap();
        for (std, branch) in [
            ("(11/13 23:00 - 11/14 00:59)", Branch::Zi),
            ("(11/14 01:00 - 11/14 02:59)", Branch::Chou),
            ("(11/14 21:00 - 11/14 22:59)", Branch::Hai),
        ] {
            assert_eq!(std, date_time_range(branch, date));
        }
    }

    #[test]
    fn dated_range_rolls_over_month_boundary() {
        let date = CivilDate::new(2024, 3, 1).unwrap();
        assert_eq!("(2/29 23:00 - 3/1 00:59)", date_time_range(Branch::Zi, date));

        let date = CivilDate::new(2024, 1, 1).unwrap();
        assert_eq!("(12/31 23:00 - 1/1 00:59)", date_time_range(Branch::Zi, date));
    }

    #[test]
    fn twelve_options_in_order() {
        let options = options(None);
        assert_eq!(12, options.len());
        for (index, option) in options.iter().enumerate() {
            assert_eq!(index, option.index);
            assert_eq!(ALL_BRANCHES[index].name(), option.value);
        }
        let values: std::collections::HashSet<_> = options.iter().map(|o| o.value).collect();
        assert_eq!(12, values.len());
    }

    #[test]
    fn option_labels() {
        let plain = options(None);
        assert_eq!("午時 (11:00-12:59)", plain[6].label);

        let date = CivilDate::new(2024, 11, 14).unwrap();
        let dated = options(Some(date));
        assert_eq!("子時 (11/13 23:00 - 11/14 00:59)", dated[0].label);
        assert_eq!("午時 (11/14 11:00 - 11/14 12:59)", dated[6].label);
    }
}
