use crate::{domain::requests::PaginationParams, errors::ClientError};
use serde::Serialize;
use serde_json::Value;

pub type QueryPairs = Vec<(String, String)>;

/// Flattens a parameter bag into query pairs, skipping every null value.
pub fn query_pairs<P: Serialize + ?Sized>(params: &P) -> Result<QueryPairs, ClientError> {
    let value = serde_json::to_value(params)?;

    let object = match value {
        Value::Object(object) => object,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ClientError::Decode(format!(
                "query parameters must be an object, got {other}"
            )));
        }
    };

    Ok(object
        .into_iter()
        .filter_map(|(key, value)| render_value(value).map(|v| (key, v)))
        .collect())
}

/// `page` and `limit` always lead; `sort`/`order` only when set; filters follow.
pub fn paginated_query<F: Serialize + ?Sized>(
    pagination: &PaginationParams,
    filters: Option<&F>,
) -> Result<QueryPairs, ClientError> {
    let mut pairs: QueryPairs = vec![
        ("page".to_string(), pagination.page.to_string()),
        ("limit".to_string(), pagination.limit.to_string()),
    ];

    if let Some(sort) = pagination.sort.as_deref().filter(|s| !s.is_empty()) {
        pairs.push(("sort".to_string(), sort.to_string()));
    }

    if let Some(order) = pagination.order {
        pairs.push(("order".to_string(), order.to_string()));
    }

    if let Some(filters) = filters {
        pairs.extend(query_pairs(filters)?);
    }

    Ok(pairs)
}

fn render_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::{CategoryFilters, ProductFilters, SortOrder};
    use std::collections::HashMap;

    fn as_map(pairs: &QueryPairs) -> HashMap<&str, &str> {
        pairs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn null_filters_are_omitted() {
        let filters = CategoryFilters {
            name: Some("Tecnología".into()),
            active: None,
            date_from: None,
            date_to: Some("2025-01-31".into()),
        };

        let pairs = query_pairs(&filters).unwrap();
        let map = as_map(&pairs);

        assert_eq!(pairs.len(), 2);
        assert_eq!(map["nombre"], "Tecnología");
        assert_eq!(map["fecha_hasta"], "2025-01-31");
        assert!(!map.contains_key("activa"));
        assert!(!map.contains_key("fecha_desde"));
    }

    #[test]
    fn scalars_use_their_display_form() {
        let filters = ProductFilters {
            category_id: Some(3),
            price_min: Some(1500.5),
            active: Some(false),
            ..Default::default()
        };

        let pairs = query_pairs(&filters).unwrap();
        let map = as_map(&pairs);

        assert_eq!(map["categoria_id"], "3");
        assert_eq!(map["precio_min"], "1500.5");
        assert_eq!(map["activo"], "false");
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn empty_bag_yields_no_pairs() {
        let pairs = query_pairs(&CategoryFilters::default()).unwrap();
        assert!(pairs.is_empty());

        let none: Option<CategoryFilters> = None;
        assert!(query_pairs(&none).unwrap().is_empty());
    }

    #[test]
    fn scalar_bag_is_rejected() {
        assert!(matches!(query_pairs(&42), Err(ClientError::Decode(_))));
    }

    #[test]
    fn pagination_always_carries_page_and_limit() {
        let pairs = paginated_query::<CategoryFilters>(&PaginationParams::new(2, 10), None).unwrap();

        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn sort_and_order_only_when_provided() {
        let pagination = PaginationParams::new(1, 10).with_sort("nombre", Some(SortOrder::Desc));
        let filters = CategoryFilters {
            active: Some(true),
            ..Default::default()
        };

        let pairs = paginated_query(&pagination, Some(&filters)).unwrap();
        let map = as_map(&pairs);

        assert_eq!(&pairs[0].0, "page");
        assert_eq!(&pairs[1].0, "limit");
        assert_eq!(map["sort"], "nombre");
        assert_eq!(map["order"], "desc");
        assert_eq!(map["activa"], "true");
        assert_eq!(pairs.len(), 5);

        let sort_only = PaginationParams::new(1, 10).with_sort("precio", None);
        let pairs = paginated_query::<CategoryFilters>(&sort_only, None).unwrap();
        assert!(as_map(&pairs).contains_key("sort"));
        assert!(!as_map(&pairs).contains_key("order"));
    }
}
