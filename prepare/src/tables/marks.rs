use ansel_composing_source::COMBINING_MARKS;

lazy_static! {
    /// отсортированный список знаков классификатора для запекания
    pub static ref COMBINING_MARKS_TABLE: Vec<u32> = marks();
}

/// в запечённом виде список ищется бинарным поиском - он обязан быть отсортирован
fn marks() -> Vec<u32>
{
    let mut codes = COMBINING_MARKS.clone();

    codes.sort();

    for window in codes.windows(2) {
        assert_ne!(window[0], window[1]);
    }

    codes
}
