use crate::view::format::{active_label, format_price, short_date};
use shared::domain::responses::{CategoryResponse, ProductResponse, UserResponse};

/// A record that can be laid out as one table line.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl TableRow for CategoryResponse {
    fn headers() -> &'static [&'static str] {
        &["ID", "Nombre", "Descripción", "Estado", "Creada"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone().unwrap_or_else(|| "-".to_string()),
            active_label(self.active).to_string(),
            short_date(self.created_at.as_deref()),
        ]
    }
}

impl TableRow for ProductResponse {
    fn headers() -> &'static [&'static str] {
        &["ID", "Nombre", "Precio", "Stock", "Categoría", "Estado"]
    }

    fn cells(&self) -> Vec<String> {
        let category = match &self.category {
            Some(category) => category.name.clone(),
            None => format!("#{}", self.category_id),
        };

        vec![
            self.id.to_string(),
            self.name.clone(),
            format_price(self.price),
            self.stock.to_string(),
            category,
            active_label(self.active).to_string(),
        ]
    }
}

impl TableRow for UserResponse {
    fn headers() -> &'static [&'static str] {
        &["ID", "Email", "Nombre", "Rol", "Estado", "Último acceso"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.email.clone(),
            format!("{} {}", self.first_name, self.last_name),
            self.role.clone().unwrap_or_else(|| "-".to_string()),
            active_label(self.active).to_string(),
            short_date(self.last_access.as_deref()),
        ]
    }
}

/// Left-aligned columns padded to the widest cell. Empty input renders `empty_message`.
pub fn render_table<T: TableRow>(rows: &[T], empty_message: &str) -> String {
    if rows.is_empty() {
        return empty_message.to_string();
    }

    let headers = T::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |values: Vec<&str>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(value, width)| pad(value, *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(cells.len() + 2);
    out.push(line(headers.to_vec()));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &cells {
        out.push(line(row.iter().map(String::as_str).collect()));
    }

    out.join("\n")
}

pub fn pager_line(current_page: u32, total_pages: u32) -> String {
    format!("Página {current_page} de {}", total_pages.max(1))
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}
