//! 배율만으로 환산되는 단위(길이, 체적, 무게, 시간, 속도)의 공통 규칙.

/// 고정 배율로 환산되는 단위 집합.
///
/// `factor()`는 "이 단위 1개가 기준 단위 몇 개인가"를 뜻한다. 기준 단위는 배율이
/// 정확히 1.0인 항목이며 카테고리마다 하나만 존재한다.
pub trait LinearUnit: Copy + Eq + 'static {
    /// 화면 표시 순서대로 나열한 전체 단위.
    const ALL: &'static [Self];

    /// 단위 이름 (예: `"fluid ounces"`).
    fn name(self) -> &'static str;

    /// 기준 단위 대비 배율. 항상 양의 유한수이다.
    fn factor(self) -> f64;

    /// 이름으로 단위를 찾는다. 대소문자와 앞뒤 공백은 무시한다.
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|u| u.name().eq_ignore_ascii_case(name))
    }

    /// 배율이 1.0인 기준 단위.
    fn base() -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.factor() == 1.0)
    }
}

/// 값을 `from` 단위에서 `to` 단위로 환산한다.
///
/// 기준 단위로 올린 뒤(`* from`) 목표 단위로 내린다(`/ to`). 같은 단위끼리는 값을
/// 그대로 돌려준다. 비유한 입력(NaN, ∞)은 걸러내지 않고 그대로 전파된다.
pub fn convert_linear<U: LinearUnit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    let base = value * from.factor();
    base / to.factor()
}

/// 표시 순서를 유지한 `(이름, 배율)` 목록.
pub fn factor_table<U: LinearUnit>() -> Vec<(&'static str, f64)> {
    U::ALL.iter().map(|u| (u.name(), u.factor())).collect()
}

/// 표시 순서를 유지한 단위 이름 목록.
pub fn names<U: LinearUnit>() -> Vec<&'static str> {
    U::ALL.iter().map(|u| u.name()).collect()
}
