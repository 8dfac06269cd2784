/// данные таблицы композиций
pub struct CompositionData<'a>
{
    /// записи знаков: знак, индекс и количество его пар
    pub marks: &'a [u64],
    /// записи пар: базовый символ и прекомпозиция
    pub pairs: &'a [u64],
}

/// список знаков классификатора
pub struct CombiningMarksData<'a>
{
    /// отсортированные кодпоинты знаков
    pub codes: &'a [u32],
}

/// данные таблицы композиций
pub fn compositions<'a>() -> CompositionData<'a>
{
    include!("./../../data/compositions.txt")
}

/// данные классификатора знаков
pub fn combining_marks<'a>() -> CombiningMarksData<'a>
{
    include!("./../../data/combining_marks.txt")
}
