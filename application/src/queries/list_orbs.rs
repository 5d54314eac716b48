//! `ListOrbs` query

use super::{GraphqlQuery, null_as_default};
use crate::ports::query_transport::QueryRequest;
use circleci_domain::{Cursor, Orb, Page};
use serde::{Deserialize, Serialize};

/// One page of the public orb listing, 20 orbs at a time
pub struct ListOrbsQuery;

impl ListOrbsQuery {
    /// Variable carrying the cursor of the previous page
    pub const AFTER: &'static str = "after";

    /// Build the request for the page following `after`.
    pub fn request(after: &Cursor) -> QueryRequest {
        QueryRequest::new(Self::DOCUMENT).var(Self::AFTER, after.as_str())
    }
}

impl GraphqlQuery for ListOrbsQuery {
    const OPERATION: &'static str = "ListOrbs";
    const DOCUMENT: &'static str = r#"
query ListOrbs ($after: String!) {
  orbs(first: 20, after: $after) {
    totalCount,
    edges {
      cursor,
      node {
        name
      }
    }
    pageInfo {
      hasNextPage
    }
  }
}"#;
    type Data = ListOrbsData;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOrbsData {
    pub orbs: OrbConnection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbConnection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<OrbEdge>,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrbEdge {
    pub cursor: String,
    pub node: OrbNode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrbNode {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
}

impl From<ListOrbsData> for Page {
    fn from(data: ListOrbsData) -> Self {
        let connection = data.orbs;
        let entries = connection
            .edges
            .into_iter()
            .map(|edge| (Cursor::new(edge.cursor), Orb::new(edge.node.name)))
            .collect();

        Page::new(entries, connection.page_info.has_next_page)
            .with_total_count(connection.total_count)
    }
}
