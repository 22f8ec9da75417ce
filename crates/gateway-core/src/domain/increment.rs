//! 거래소 증분 단위(increment) 정규화 모듈.
//!
//! 거래소는 심볼마다 가격(`priceIncrement`)과 수량(`baseIncrement`)의
//! 최소 단위를 정하고, 단위에 맞지 않는 주문을 거부합니다.
//! 이 모듈은 값을 해당 단위로 내림하는 기능을 제공합니다.
//!
//! 모든 연산은 `Decimal`로 수행되며 이진 부동소수점을 사용하지 않습니다.

use rust_decimal::Decimal;

/// 값을 증분 단위의 배수로 내림합니다.
///
/// `floor(value / increment) * increment`를 계산하고, 결과의 소수 자릿수를
/// 증분 단위 자체의 자릿수에 맞춥니다. 올림은 하지 않습니다.
///
/// # Arguments
/// * `value` - 정규화할 값 (음수 불가, 호출 전에 검증)
/// * `increment` - 증분 단위 (예: `0.001`)
///
/// # Returns
/// 증분 단위로 내림된 값. `value < increment`이면 0.
/// `increment`가 0 이하이면 값을 그대로 반환합니다.
/// 나눗셈이나 곱셈이 `Decimal` 범위를 넘으면 `None`.
///
/// # Example
/// ```
/// use gateway_core::round_to_increment;
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_to_increment(dec!(12.3456), dec!(0.001)), Some(dec!(12.345)));
/// assert_eq!(round_to_increment(Decimal::MAX, dec!(0.01)), None);
/// ```
pub fn round_to_increment(value: Decimal, increment: Decimal) -> Option<Decimal> {
    if increment <= Decimal::ZERO {
        return Some(value);
    }

    let steps = value.checked_div(increment)?.floor();
    let mut rounded = steps.checked_mul(increment)?;
    rounded.rescale(decimal_places(increment));
    Some(rounded)
}

/// 증분 단위의 유효 소수 자릿수.
///
/// 끝자리 0은 무시합니다 (`0.00010` → 4, `1.0` → 0).
pub fn decimal_places(increment: Decimal) -> u32 {
    increment.normalize().scale()
}

/// 값이 증분 단위의 배수인지 검증합니다.
pub fn is_on_increment(value: Decimal, increment: Decimal) -> bool {
    if increment <= Decimal::ZERO {
        return true;
    }
    value
        .checked_rem(increment)
        .is_some_and(|rest| rest.is_zero())
}
