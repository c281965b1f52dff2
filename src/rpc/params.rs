//! Maps typed request fields onto GitHub query string parameters.

use tonic::Status;

use crate::github::QueryParams;

use super::proto::{Order, SearchRequest, Sort};

/// Translate the typed search fields into GitHub's string parameters.
///
/// Every resulting pair carries a caller-chosen value; proto defaults are
/// omitted so the provider applies its own defaults. Out-of-range numbers
/// and unknown enum values are rejected before anything leaves the
/// process. Pairs are emitted in a fixed order: sort, order, per_page,
/// page.
pub fn map_search_params(request: &SearchRequest) -> Result<QueryParams, Status> {
    let mut params = QueryParams::new();

    match Sort::try_from(request.sort) {
        Ok(Sort::Unspecified) => {}
        Ok(Sort::Indexed) => params.push(("sort", "indexed".to_owned())),
        Err(_) => {
            return Err(Status::invalid_argument(
                "invalid value for 'sort': allowed value: 'indexed'",
            ))
        }
    }

    match Order::try_from(request.order) {
        Ok(Order::Unspecified) => {}
        Ok(Order::Asc) => params.push(("order", "asc".to_owned())),
        Ok(Order::Desc) => params.push(("order", "desc".to_owned())),
        Err(_) => {
            return Err(Status::invalid_argument(
                "invalid value for 'order': allowed values: 'asc', 'desc'",
            ))
        }
    }

    match request.per_page {
        0 => {}
        v @ 1..=100 => params.push(("per_page", v.to_string())),
        _ => {
            return Err(Status::invalid_argument(
                "invalid value for 'per_page': must be an integer between 1 and 100",
            ))
        }
    }

    match request.page {
        0 => {}
        v if v > 0 => params.push(("page", v.to_string())),
        _ => {
            return Err(Status::invalid_argument(
                "invalid value for 'page': must be an integer greater than or equal to 1",
            ))
        }
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    fn request() -> SearchRequest {
        SearchRequest {
            search_term: "foo".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_emit_no_parameters() {
        let params = map_search_params(&request()).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn indexed_sort_is_emitted() {
        let mut req = request();
        req.sort = Sort::Indexed as i32;

        let params = map_search_params(&req).unwrap();
        assert_eq!(params, vec![("sort", "indexed".to_owned())]);
    }

    #[test]
    fn unknown_sort_value_is_invalid() {
        let mut req = request();
        req.sort = 99;

        let status = map_search_params(&req).unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("sort"));
    }

    #[test]
    fn orders_map_to_their_tokens() {
        for (order, token) in [(Order::Asc, "asc"), (Order::Desc, "desc")] {
            let mut req = request();
            req.order = order as i32;

            let params = map_search_params(&req).unwrap();
            assert_eq!(params, vec![("order", token.to_owned())]);
        }
    }

    #[test]
    fn unknown_order_value_is_invalid() {
        let mut req = request();
        req.order = -3;

        let status = map_search_params(&req).unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("order"));
    }

    #[test]
    fn per_page_accepts_its_bounds() {
        for value in [1, 50, 100] {
            let mut req = request();
            req.per_page = value;

            let params = map_search_params(&req).unwrap();
            assert_eq!(params, vec![("per_page", value.to_string())]);
        }
    }

    #[test]
    fn per_page_out_of_range_is_invalid() {
        for value in [101, -1] {
            let mut req = request();
            req.per_page = value;

            let status = map_search_params(&req).unwrap_err();
            assert_eq!(status.code(), Code::InvalidArgument);
            assert!(status.message().contains("per_page"));
        }
    }

    #[test]
    fn page_must_be_positive() {
        let mut req = request();
        req.page = 7;
        assert_eq!(
            map_search_params(&req).unwrap(),
            vec![("page", "7".to_owned())]
        );

        req.page = -1;
        let status = map_search_params(&req).unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("page"));
    }

    #[test]
    fn unset_numbers_are_omitted() {
        let mut req = request();
        req.page = 0;
        req.per_page = 0;

        assert!(map_search_params(&req).unwrap().is_empty());
    }

    #[test]
    fn parameters_keep_a_fixed_order() {
        let req = SearchRequest {
            search_term: "foo".to_owned(),
            user: String::new(),
            sort: Sort::Indexed as i32,
            order: Order::Desc as i32,
            page: 2,
            per_page: 10,
        };

        assert_eq!(
            map_search_params(&req).unwrap(),
            vec![
                ("sort", "indexed".to_owned()),
                ("order", "desc".to_owned()),
                ("per_page", "10".to_owned()),
                ("page", "2".to_owned()),
            ]
        );
    }
}
