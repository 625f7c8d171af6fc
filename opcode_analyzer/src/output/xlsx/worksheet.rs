//!
//! XLSX worksheet holding point columns and their charts.
//!

///
/// The cell range of a written column pair.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnPair {
    /// The first data row.
    pub first_row: u32,
    /// The last data row.
    pub last_row: u32,
    /// The category column.
    pub category_column: u16,
    /// The value column.
    pub value_column: u16,
}

impl ColumnPair {
    ///
    /// The chart range of the categories.
    ///
    pub fn categories<'a>(&self, sheet: &'a str) -> (&'a str, u32, u16, u32, u16) {
        (
            sheet,
            self.first_row,
            self.category_column,
            self.last_row,
            self.category_column,
        )
    }

    ///
    /// The chart range of the values.
    ///
    pub fn values<'a>(&self, sheet: &'a str) -> (&'a str, u32, u16, u32, u16) {
        (
            sheet,
            self.first_row,
            self.value_column,
            self.last_row,
            self.value_column,
        )
    }
}

///
/// XLSX worksheet holding point columns and their charts.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// The worksheet name.
    pub name: String,
    /// The next free column.
    pub next_column: u16,
}

impl Worksheet {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: f64 = 14.0;

    /// The caption row.
    const CAPTION_ROW: u32 = 0;

    /// The column header row.
    const HEADER_ROW: u32 = 1;

    /// The first data row.
    const FIRST_DATA_ROW: u32 = 2;

    ///
    /// Creates a new worksheet with the given name and caption.
    ///
    pub fn new(name: &str, caption: &str) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;
        worksheet.write_with_format(
            Self::CAPTION_ROW,
            0,
            caption,
            &Self::worksheet_caption_format(),
        )?;

        Ok(Self {
            worksheet,
            name: name.to_owned(),
            next_column: 0,
        })
    }

    ///
    /// Writes two adjacent columns of `(category, value)` pairs and returns their range.
    ///
    pub fn write_pairs<C, V>(
        &mut self,
        category_header: &str,
        value_header: &str,
        pairs: impl IntoIterator<Item = (C, V)>,
    ) -> anyhow::Result<Option<ColumnPair>>
    where
        C: rust_xlsxwriter::IntoExcelData,
        V: rust_xlsxwriter::IntoExcelData,
    {
        let category_column = self.next_column;
        let value_column = category_column + 1;
        self.next_column += 2;

        for (column, header) in [(category_column, category_header), (value_column, value_header)]
        {
            self.worksheet
                .set_column_width(column, Self::VALUE_COLUMN_WIDTH)?;
            self.worksheet.write_with_format(
                Self::HEADER_ROW,
                column,
                header,
                &Self::column_header_format(),
            )?;
        }

        let mut last_row = None;
        for (row, (category, value)) in (Self::FIRST_DATA_ROW..).zip(pairs) {
            self.worksheet.write_with_format(
                row,
                category_column,
                category,
                &Self::row_header_format(),
            )?;
            self.worksheet
                .write_with_format(row, value_column, value, &Self::value_format())?;
            last_row = Some(row);
        }

        Ok(last_row.map(|last_row| ColumnPair {
            first_row: Self::FIRST_DATA_ROW,
            last_row,
            category_column,
            value_column,
        }))
    }

    ///
    /// Writes a key and value row below the caption.
    ///
    pub fn write_property<V>(&mut self, row: u32, key: &str, value: V) -> anyhow::Result<()>
    where
        V: rust_xlsxwriter::IntoExcelData,
    {
        self.worksheet.set_column_width(0, 20)?;
        self.worksheet.set_column_width(1, 28)?;
        self.worksheet.write_with_format(
            Self::FIRST_DATA_ROW + row,
            0,
            key,
            &Self::row_header_format(),
        )?;
        self.worksheet
            .write_with_format(Self::FIRST_DATA_ROW + row, 1, value, &Self::value_format())?;
        Ok(())
    }

    ///
    /// Inserts a chart to the right of the written columns.
    ///
    pub fn insert_chart(&mut self, chart: &rust_xlsxwriter::Chart) -> anyhow::Result<()> {
        self.worksheet
            .insert_chart(Self::HEADER_ROW, self.next_column + 1, chart)?;
        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(16);
        let format = format.set_font_color("#FFFFFF");
        let format = format.set_background_color("#4C6EF5");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::VerticalCenter);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_background_color("#FFFFFF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        let format = format.set_num_format("0.000");
        format
    }
}
