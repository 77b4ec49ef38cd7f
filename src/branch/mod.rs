//! 地支時辰
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 將24小時制時間換算為十二時辰：自23時起算次日子時，其餘每兩小時為一個時辰。
//! 時與時辰的換算規則為：時 ≥ 23 屬子時（序號 0），否則序號為 (時 + 1) / 2 除以
//! 12 的餘數。

use crate::clock::ClockTime;
use crate::date::CivilDate;

pub mod fmt;

/// 十二地支，亦即十二時辰之名。序號 0 至 11 對應子至亥。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// 全部十二地支，依序號排列。
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const NAMES_EN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];
// 日文採同形漢字
const NAMES_JA: [&str; 12] = NAMES;

impl Branch {
    /// 依序號（0 至 11）取得地支，序號超界則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use duhorilo::Branch;
    ///
    /// assert_eq!(Some(Branch::Wu), Branch::from_index(6));
    /// assert_eq!(None, Branch::from_index(12));
    /// ```
    pub fn from_index(index: usize) -> Option<Branch> {
        ALL_BRANCHES.get(index).copied()
    }

    /// 地支序號，子為 0，亥為 11。
    pub fn index(self) -> usize {
        self as usize
    }

    /// 地支名。
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }
    /// 地支拼音名。
    pub fn name_en(self) -> &'static str {
        NAMES_EN[self.index()]
    }
    /// 地支日文名，與漢字同形。
    pub fn name_ja(self) -> &'static str {
        NAMES_JA[self.index()]
    }

    /// 依地支名查得地支，查無則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use duhorilo::Branch;
    ///
    /// assert_eq!(Some(Branch::Wu), Branch::from_name("午"));
    /// assert_eq!(None, Branch::from_name("甲"));
    /// ```
    pub fn from_name(name: &str) -> Option<Branch> {
        ALL_BRANCHES.into_iter().find(|branch| branch.name() == name)
    }

    /// 依時刻取得所屬時辰。分鐘不影響結果。
    ///
    /// # 用例
    ///
    /// ```
    /// use duhorilo::{Branch, ClockTime};
    ///
    /// let noon = ClockTime::parse("12:00").unwrap();
    /// assert_eq!(Branch::Wu, Branch::of_time(noon));
    ///
    /// let late = ClockTime::parse("23:45").unwrap();
    /// assert_eq!(Branch::Zi, Branch::of_time(late));
    /// ```
    pub fn of_time(time: ClockTime) -> Branch {
        Self::of_hour(time.hour())
    }

    /// 依小時（0 至 23）取得所屬時辰。
    fn of_hour(hour: u32) -> Branch {
        let index = if hour >= 23 { 0 } else { (hour + 1) / 2 % 12 };
        ALL_BRANCHES[index as usize]
    }

    /// 取得當前時刻所屬時辰。
    pub fn current() -> Branch {
        Self::of_time(ClockTime::now())
    }

    /// 時辰的起始小時，子時為 23。
    pub fn start_hour(self) -> u32 {
        (self.index() as u32 * 2 + 23) % 24
    }
    /// 時辰的結束小時，子時為 0。
    pub fn end_hour(self) -> u32 {
        self.index() as u32 * 2
    }

    /// 該時辰是否跨越午夜，即是否為子時。
    pub fn spans_midnight(self) -> bool {
        self == Branch::Zi
    }

    /// 時辰的代表時刻，取時辰中點（XX:30）。
    ///
    /// 子時取 23:30 而非 00:30，繫於窗口起點以保同日語義。
    ///
    /// # 用例
    ///
    /// ```
    /// use duhorilo::Branch;
    ///
    /// assert_eq!("12:30", Branch::Wu.representative_time().to_string());
    /// assert_eq!("23:30", Branch::Zi.representative_time().to_string());
    /// ```
    pub fn representative_time(self) -> ClockTime {
        let hour = match self {
            Branch::Zi => 23,
            _ => self.index() as u32 * 2,
        };
        ClockTime::new(hour, 30).expect("representative hour in 0..=23")
    }
}

/// 時辰換算結果，含時辰各名與其時間範圍。
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BranchInfo {
    /// 時辰
    pub branch: Branch,
    /// 時辰序號，0 至 11
    pub index: usize,
    /// 地支名
    pub name: &'static str,
    /// 拼音名
    pub name_en: &'static str,
    /// 日文名
    pub name_ja: &'static str,
    /// 時間範圍，如 `"11:00-12:59"`
    pub time_range: String,
}

impl BranchInfo {
    fn of(branch: Branch) -> Self {
        BranchInfo {
            branch,
            index: branch.index(),
            name: branch.name(),
            name_en: branch.name_en(),
            name_ja: branch.name_ja(),
            time_range: fmt::time_range(branch),
        }
    }
}

/// 將 `"HH:MM"` 時間字串換算為時辰信息。
///
/// 字串為空或無法解析時返回 `None`。
///
/// # 用例
///
/// ```
/// use duhorilo::branch;
///
/// let info = branch::time_to_branch("23:30").unwrap();
/// assert_eq!(("子", "Zi", 0), (info.name, info.name_en, info.index));
/// assert_eq!("23:00-00:59", info.time_range);
///
/// assert_eq!(None, branch::time_to_branch(""));
/// ```
pub fn time_to_branch(time: &str) -> Option<BranchInfo> {
    let time = ClockTime::parse(time)?;
    Some(BranchInfo::of(Branch::of_time(time)))
}

/// 取得當前時刻的時辰信息。
pub fn current() -> BranchInfo {
    BranchInfo::of(Branch::current())
}

/// 依時辰名取得其代表時刻，格式 `"HH:MM"`。
///
/// 查無此名時返回 `"12:00"`，不作錯誤處理。
///
/// # 用例
///
/// ```
/// use duhorilo::branch;
///
/// assert_eq!("12:30", branch::time_from_branch("午"));
/// assert_eq!("23:30", branch::time_from_branch("子"));
/// assert_eq!("12:00", branch::time_from_branch("無此名"));
/// ```
pub fn time_from_branch(name: &str) -> String {
    match Branch::from_name(name) {
        Some(branch) => branch.representative_time().to_string(),
        None => "12:00".to_owned(),
    }
}

/// 判斷該時刻是否須將日期調整至次日。23:00 至 23:59 屬次日子時，須調整。
///
/// 字串為空或無法解析時返回 `false`。
///
/// # 用例
///
/// ```
/// use duhorilo::branch;
///
/// assert!(branch::needs_date_adjustment("23:00"));
/// assert!(!branch::needs_date_adjustment("22:59"));
/// assert!(!branch::needs_date_adjustment("00:00"));
/// ```
pub fn needs_date_adjustment(time: &str) -> bool {
    ClockTime::parse(time).is_some_and(|time| time.hour() >= 23)
}

/// 依時刻調整日期：23 時及以後日期加一日，否則原樣返回。
///
/// 日期本身不合法時返回 `None`。對已調整的日期配以非 23 時時刻再調用為恆等操作。
///
/// # 用例
///
/// ```
/// use duhorilo::branch;
///
/// let adjusted = branch::adjust_date_for_time(2023, 12, 31, "23:15").unwrap();
/// assert_eq!((2024, 1, 1), adjusted.ymd());
///
/// let unchanged = branch::adjust_date_for_time(2024, 1, 1, "00:30").unwrap();
/// assert_eq!((2024, 1, 1), unchanged.ymd());
/// ```
pub fn adjust_date_for_time(year: i32, month: u32, day: u32, time: &str) -> Option<CivilDate> {
    let date = CivilDate::new(year, month, day)?;
    Some(if needs_date_adjustment(time) {
        date.next_day()
    } else {
        date
    })
}
