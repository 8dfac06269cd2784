/// информация о запечённой таблице композиций
pub fn print_compositions(marks: &[u64], pairs: &[u64])
{
    println!(
        "\nкомпозиции:\n  \
        знаков: {}\n  \
        пар: {}\n  \
        общий размер: {}",
        marks.len(),
        pairs.len(),
        (marks.len() + pairs.len()) * 8,
    );

    println!();

    // разбивка по знакам, по убыванию количества пар
    let mut counts: Vec<(u32, u64)> = marks
        .iter()
        .map(|entry| (*entry as u32 & 0x3FFFF, entry >> 32))
        .collect();

    counts.sort_by(|a, b| b.1.cmp(&a.1));

    for (mark, count) in counts {
        println!("  {:04X}: {}", mark, count);
    }

    println!();

    // пары, где базовый символ - сам результат композиции
    let composed: Vec<u32> = pairs
        .iter()
        .map(|entry| (entry >> 18) as u32 & 0x3FFFF)
        .collect();

    let multi_stage = pairs
        .iter()
        .filter(|entry| composed.contains(&(**entry as u32 & 0x3FFFF)))
        .count();

    println!("  ступенчатых пар: {}", multi_stage);

    println!();
}

/// информация о запечённом списке знаков классификатора
pub fn print_combining_marks(codes: &[u32])
{
    println!(
        "\nклассификатор:\n  \
        знаков: {}\n  \
        общий размер: {}",
        codes.len(),
        codes.len() * 4,
    );

    println!();
}
