/// маска кодпоинта в записи (18 бит)
const CODE_MASK: u32 = 0x3FFFF;
/// маска индекса в информации о парах знака
const INDEX_MASK: u32 = 0x3FFF;

/// распакованная информация о знаке -
/// индекс первой пары знака в таблице пар и количество его пар
///
/// формат записи знака:
/// ____ ____  ____ ____    ____ ____  zzzz zzzz    yyyy yyyy  yyyy yyxx    xxxx xxxx  xxxx xxxx
/// где:
///     xx.. - диакритический знак
///     yy.. - индекс первой пары знака
///     zz.. - количество пар знака
pub struct MarkCombining
{
    index: u16,
    count: u16,
}

impl From<u64> for MarkCombining
{
    fn from(entry: u64) -> Self
    {
        let info = (entry >> 18) as u32;

        Self {
            index: (info & INDEX_MASK) as u16,
            count: (info >> 14) as u16,
        }
    }
}

impl MarkCombining
{
    /// отрезок таблицы пар для знака
    #[inline(always)]
    pub fn pairs<'a>(&self, pairs: &'a [u64]) -> &'a [u64]
    {
        let first = self.index as usize;
        let last = first + self.count as usize;

        &pairs[first .. last]
    }
}

/// найти запись знака в таблице знаков
#[inline(always)]
pub fn find_mark(marks: &[u64], mark: u32) -> Option<MarkCombining>
{
    let i = marks
        .binary_search_by_key(&mark, |entry| (*entry as u32) & CODE_MASK)
        .ok()?;

    Some(MarkCombining::from(marks[i]))
}

/// найти прекомпозицию в отрезке таблицы пар
///
/// формат записи пары:
/// ____ ____  ____ ____    ____ ____  ____ yyyy    yyyy yyyy  yyyy yyxx    xxxx xxxx  xxxx xxxx
/// где:
///     xx.. - базовый символ
///     yy.. - прекомпозиция
#[inline(always)]
pub fn find_pair(pairs: &[u64], base: u32) -> Option<u32>
{
    let i = pairs
        .binary_search_by_key(&base, |entry| (*entry as u32) & CODE_MASK)
        .ok()?;

    Some((pairs[i] >> 18) as u32 & CODE_MASK)
}
