use crate::ports::outbound::{
    DependencyGraphSource, DependencyPage, DependencyRecord, ManifestNode, ManifestPage,
    PageInfo, PageRequest, RepositoryMetadataRepository,
};
use crate::sbom_generation::domain::repository::DEFAULT_HOST;
use crate::sbom_generation::domain::RepositoryRef;
use crate::shared::error::SbomError;
use crate::shared::Result;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};

const DEPENDENCY_GRAPH_ACCEPT: &str = "application/vnd.github.hawkgirl-preview+json";
const REST_ACCEPT: &str = "application/vnd.github+json";

const REPOSITORY_DEPENDENCIES_QUERY: &str = r#"query RepositoryDependencies($owner: String!, $name: String!, $first: Int!, $manifestCursor: String, $dependencyCursor: String) {
  repository(owner: $owner, name: $name) {
    dependencyGraphManifests(first: $first, after: $manifestCursor) {
      pageInfo { hasNextPage endCursor }
      nodes {
        filename
        dependencies(first: $first, after: $dependencyCursor) {
          pageInfo { hasNextPage endCursor }
          nodes { packageManager packageName requirements }
        }
      }
    }
  }
}"#;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: QueryVariables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryVariables<'a> {
    owner: &'a str,
    name: &'a str,
    first: u32,
    manifest_cursor: Option<&'a str>,
    dependency_cursor: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    dependency_graph_manifests: Connection<ManifestJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Connection<T> {
    page_info: PageInfoJson,
    /// Absent and `null` both mean an empty page
    nodes: Option<Vec<Option<T>>>,
}

impl<T> Connection<T> {
    fn into_nodes(self) -> (Vec<T>, PageInfo) {
        let nodes = self.nodes.unwrap_or_default().into_iter().flatten().collect();
        (nodes, self.page_info.into())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfoJson {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ManifestJson {
    filename: String,
    dependencies: Connection<DependencyJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DependencyJson {
    package_manager: Option<String>,
    package_name: String,
    requirements: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RepositoryJson {
    license: Option<RepositoryLicenseJson>,
}

#[derive(Debug, Deserialize)]
struct RepositoryLicenseJson {
    spdx_id: Option<String>,
}

impl From<PageInfoJson> for PageInfo {
    fn from(page_info: PageInfoJson) -> Self {
        PageInfo {
            has_next_page: page_info.has_next_page,
            end_cursor: page_info.end_cursor,
        }
    }
}

impl From<ManifestJson> for ManifestNode {
    fn from(manifest: ManifestJson) -> Self {
        let (dependencies, page_info) = manifest.dependencies.into_nodes();
        let nodes = dependencies
            .into_iter()
            .map(|dependency| DependencyRecord {
                package_manager: dependency.package_manager,
                package_name: dependency.package_name,
                requirements: dependency.requirements.unwrap_or_default(),
            })
            .collect();

        ManifestNode {
            filename: manifest.filename,
            dependencies: DependencyPage { nodes, page_info },
        }
    }
}

/// GitHub API endpoints for one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubEndpoints {
    pub api_url: String,
    pub graphql_url: String,
}

impl GitHubEndpoints {
    /// Default endpoints for a host: github.com uses api.github.com,
    /// GitHub Enterprise Server hosts serve the API under `/api`.
    pub fn for_host(host: &str) -> Self {
        if host == DEFAULT_HOST {
            Self {
                api_url: "https://api.github.com".to_string(),
                graphql_url: "https://api.github.com/graphql".to_string(),
            }
        } else {
            Self {
                api_url: format!("https://{}/api/v3", host),
                graphql_url: format!("https://{}/api/graphql", host),
            }
        }
    }
}

/// GitHubClient adapter for the dependency graph and repository metadata
///
/// Blocking HTTP client; one method call is one round-trip. Transport
/// failures, non-success statuses and GraphQL errors are all fatal
/// `SbomError::GraphQuery` values.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    endpoints: GitHubEndpoints,
    token: String,
}

impl GitHubClient {
    pub fn new(endpoints: GitHubEndpoints, token: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("gh-sbom/{}", version);
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            endpoints: GitHubEndpoints {
                api_url: endpoints.api_url.trim_end_matches('/').to_string(),
                graphql_url: endpoints.graphql_url,
            },
            token: token.into(),
        })
    }

    fn graph_error(request: &PageRequest, details: impl Into<String>) -> anyhow::Error {
        SbomError::GraphQuery {
            repository: format!("{}/{}", request.owner, request.name),
            details: details.into(),
        }
        .into()
    }

    fn ensure_success(response: Response) -> std::result::Result<Response, String> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(body);
        Err(format!("GitHub API returned status code {}: {}", status, message.trim()))
    }
}

impl DependencyGraphSource for GitHubClient {
    fn fetch_manifest_page(&self, request: &PageRequest) -> Result<ManifestPage> {
        tracing::debug!(
            owner = %request.owner,
            name = %request.name,
            manifest_cursor = ?request.manifest_cursor,
            dependency_cursor = ?request.dependency_cursor,
            "querying dependency graph"
        );

        let body = GraphQlRequest {
            query: REPOSITORY_DEPENDENCIES_QUERY,
            variables: QueryVariables {
                owner: &request.owner,
                name: &request.name,
                first: request.first,
                manifest_cursor: request.manifest_cursor.as_deref(),
                dependency_cursor: request.dependency_cursor.as_deref(),
            },
        };

        let response = self
            .client
            .post(&self.endpoints.graphql_url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, DEPENDENCY_GRAPH_ACCEPT)
            .json(&body)
            .send()
            .map_err(|e| Self::graph_error(request, e.to_string()))?;

        let response =
            Self::ensure_success(response).map_err(|details| Self::graph_error(request, details))?;

        let payload: GraphQlResponse = response
            .json()
            .map_err(|e| Self::graph_error(request, format!("invalid response body: {}", e)))?;

        if let Some(errors) = payload.errors.filter(|errors| !errors.is_empty()) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(Self::graph_error(request, messages.join("; ")));
        }

        let Some(repository) = payload.data.and_then(|data| data.repository) else {
            return Err(Self::graph_error(request, "repository not found or not accessible"));
        };

        let (manifests, page_info) = repository.dependency_graph_manifests.into_nodes();
        Ok(ManifestPage {
            nodes: manifests.into_iter().map(ManifestNode::from).collect(),
            page_info,
        })
    }
}

impl RepositoryMetadataRepository for GitHubClient {
    fn fetch_repository_license(&self, repository: &RepositoryRef) -> Result<Option<String>> {
        let url = format!(
            "{}/repos/{}/{}",
            self.endpoints.api_url,
            urlencoding::encode(repository.owner()),
            urlencoding::encode(repository.name())
        );
        tracing::debug!(%url, "fetching repository metadata");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, REST_ACCEPT)
            .send()?;
        let response = Self::ensure_success(response).map_err(anyhow::Error::msg)?;

        let metadata: RepositoryJson = response.json()?;
        Ok(metadata
            .license
            .and_then(|license| license.spdx_id)
            .filter(|id| !id.is_empty()))
    }
}
