use crate::data;

/// классификатор непробельных диакритических знаков ANSEL
///
/// множество знаков зафиксировано стандартом и не совпадает с множеством
/// знаков таблицы композиций
pub struct CombiningMarkSet<'a>
{
    /// отсортированный список кодпоинтов
    codes: &'a [u32],
}

impl<'a> CombiningMarkSet<'a>
{
    /// классификатор на запечённых данных
    pub fn new() -> Self
    {
        Self::from_baked(data::combining_marks())
    }

    /// заранее подготовленные данные
    pub fn from_baked(source: data::CombiningMarksData<'a>) -> Self
    {
        Self {
            codes: source.codes,
        }
    }

    /// является ли кодпоинт диакритическим знаком ANSEL?
    #[inline(never)]
    pub fn contains(&self, code: u32) -> bool
    {
        self.codes.binary_search(&code).is_ok()
    }
}
