//! 달력 날짜 값 객체
//!
//! 일기의 키가 되는 날짜를 타임존 없이 다룹니다.
//! 월/ISO 주차/요일 버킷팅이 모두 같은 [`NaiveDate`] 에서 계산되므로
//! 로컬 시간과 UTC 사이의 하루 밀림이 생기지 않습니다.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AppError;

/// `YYYY-MM-DD` 형식의 달력 날짜
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// 정규화된 `YYYY-MM-DD` 문자열만 허용합니다.
    ///
    /// `2024-3-5` 처럼 0 채움이 없는 형식은 거부됩니다.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let invalid = || AppError::ValidationError(format!("Invalid date '{}': expected YYYY-MM-DD", value));

        let date = NaiveDate::parse_from_str(value, Self::FORMAT).map_err(|_| invalid())?;
        let parsed = Self(date);

        if parsed.to_string() != value {
            return Err(invalid());
        }

        Ok(parsed)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// `YYYY-MM` 월 버킷 키
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.0.year(), self.0.month())
    }

    /// `<ISO 연도>-W<주차>` 주 버킷 키
    ///
    /// 월요일 시작, 그 해 첫 목요일이 속한 주가 1주차입니다.
    /// 연도는 달력 연도가 아니라 ISO 연도이므로 `2021-01-01` 은 `2020-W53` 입니다.
    pub fn iso_week_key(&self) -> String {
        let week = self.0.iso_week();
        format!("{}-W{}", week.year(), week.week())
    }

    /// 일요일=0 ... 토요일=6
    pub fn weekday_index(&self) -> usize {
        self.0.weekday().num_days_from_sunday() as usize
    }

    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// `self` 부터 `end` 까지(포함)의 일수. `self > end` 면 0 입니다.
    pub fn days_inclusive(&self, end: &CalendarDate) -> i64 {
        (end.0.signed_duration_since(self.0).num_days() + 1).max(0)
    }

    /// `self` 부터 `end` 까지(포함) 하루씩 순회합니다. `self > end` 면 비어 있습니다.
    pub fn days_through(self, end: CalendarDate) -> impl Iterator<Item = CalendarDate> {
        std::iter::successors(Some(self), CalendarDate::succ).take_while(move |day| *day <= end)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|e| serde::de::Error::custom(e.client_message().to_string()))
    }
}
