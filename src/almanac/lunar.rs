//! 農曆日期記法解析。
//!
//! 上游只提供「九月廿九」這類不透明的中文農曆字串，非中文顯示需要把它
//! 拆成數字月／日。解析為全函式：任何輸入都回傳結果，辨識不出的部分
//! 以 0 表示，絕不 panic。

/// 解析結果。0 表示該部分無法辨識。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub month: u8,
    pub day: u8,
}

/// 把傳統農曆記法拆成數字 (月, 日)。
///
/// 文法：可選的「閏」前綴、月 token、「月」、日 token。
/// 月 token 接受正／一到十二，十一、十二月亦接受俗稱「冬」「臘」。
/// 日 token 為「初」「十」「廿」「卅」四種前綴加數字尾，或單獨成數。
pub fn parse_lunar_date(text: &str) -> LunarDate {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('閏').unwrap_or(trimmed);
    let Some((month_token, day_token)) = trimmed.split_once('月') else {
        return LunarDate { month: 0, day: 0 };
    };
    LunarDate {
        month: month_value(month_token),
        day: day_value(day_token),
    }
}

fn month_value(token: &str) -> u8 {
    match token {
        "正" | "一" => 1,
        "二" => 2,
        "三" => 3,
        "四" => 4,
        "五" => 5,
        "六" => 6,
        "七" => 7,
        "八" => 8,
        "九" => 9,
        "十" => 10,
        "十一" | "冬" => 11,
        "十二" | "臘" => 12,
        _ => 0,
    }
}

/// 「初十」為第 10 日，故「初」的數字尾也接受「十」。
fn digit_value(ch: char) -> Option<u8> {
    match ch {
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        '十' => Some(10),
        _ => None,
    }
}

fn day_value(token: &str) -> u8 {
    let mut chars = token.chars();
    let Some(head) = chars.next() else {
        return 0;
    };
    let rest: String = chars.collect();

    let suffix = || -> Option<u8> {
        let mut it = rest.chars();
        let d = digit_value(it.next()?)?;
        if it.next().is_some() {
            return None;
        }
        Some(d)
    };

    match head {
        '初' => suffix().unwrap_or(0),
        '十' if rest.is_empty() => 10,
        '十' => suffix().filter(|d| *d < 10).map_or(0, |d| 10 + d),
        '廿' if rest.is_empty() => 20,
        '廿' => suffix().filter(|d| *d < 10).map_or(0, |d| 20 + d),
        '卅' if rest.is_empty() => 30,
        '卅' => suffix().filter(|d| *d < 10).map_or(0, |d| 30 + d),
        _ => positional_value(token),
    }
}

/// 防禦用的後備：把「二十」「二十一」這類位值記法逐字組合。
fn positional_value(token: &str) -> u8 {
    let mut total: u8 = 0;
    let mut pending: u8 = 0;
    for ch in token.chars() {
        match digit_value(ch) {
            Some(10) => {
                total = if pending == 0 { 10 } else { pending * 10 };
                pending = 0;
            }
            Some(d) => pending = d,
            None => return 0,
        }
    }
    total.saturating_add(pending)
}
