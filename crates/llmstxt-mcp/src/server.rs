//! MCP server implementation for llms-txt-explorer

use std::sync::Arc;

use llmstxt_core::{WebsiteChecker, WebsiteRegistry};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject,
    ListResourcesResult, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
    ReadResourceRequestParam, ReadResourceResult, ResourceContents, ServerCapabilities,
    ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use serde::Serialize;

use crate::error::{McpError, McpResult};
use crate::resources::{self, websites::WEBSITE_MIME_TYPE};
use crate::tools::{self, CHECK_WEBSITE, CheckWebsiteParams, LIST_WEBSITES, ListWebsitesParams};

/// Name reported in the MCP handshake
pub const SERVER_NAME: &str = "llms-txt-explorer";

/// MCP server routing tool and resource requests to the check engine and registry
#[derive(Clone)]
pub struct McpServer {
    checker: Arc<WebsiteChecker>,
    registry: Arc<WebsiteRegistry>,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(checker: WebsiteChecker, registry: WebsiteRegistry) -> Self {
        Self {
            checker: Arc::new(checker),
            registry: Arc::new(registry),
        }
    }

    /// Check engine shared by every request
    pub fn checker(&self) -> &WebsiteChecker {
        &self.checker
    }

    /// Known websites loaded at startup
    pub fn registry(&self) -> &WebsiteRegistry {
        &self.registry
    }

    /// Serve the MCP protocol over stdio
    pub async fn serve_stdio(&self) -> McpResult<()> {
        tracing::info!(websites = self.registry.len(), "llms-txt-explorer MCP server starting");

        let stdin = tokio::io::stdin();
        let stdout = tokio::io::stdout();

        let service = rmcp::serve_server(self.clone(), (stdin, stdout))
            .await
            .map_err(|e| {
                tracing::error!("server initialization error: {}", e);
                McpError::Protocol(e.to_string())
            })?;

        // Keep the service running until the client disconnects
        service.waiting().await.map_err(|e| {
            tracing::error!("server runtime error: {}", e);
            McpError::Protocol(e.to_string())
        })?;

        tracing::info!("llms-txt-explorer MCP server stopped");
        Ok(())
    }

    /// Run the named tool with raw JSON arguments
    pub async fn call_tool_by_name(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> McpResult<CallToolResult> {
        tracing::debug!(tool = name, "calling tool");
        match name {
            CHECK_WEBSITE => {
                let params = CheckWebsiteParams::from_arguments(arguments);
                let output = tools::handle_check_website(params, &self.checker).await?;
                text_result(&output)
            },
            LIST_WEBSITES => {
                let params = ListWebsitesParams::from_arguments(arguments);
                let output = tools::handle_list_websites(&params, &self.registry);
                text_result(&output)
            },
            other => Err(McpError::UnknownTool(other.to_string())),
        }
    }

    /// Read a `website://` resource
    pub async fn read_resource_by_uri(&self, uri: &str) -> McpResult<ReadResourceResult> {
        let payload =
            resources::handle_website_resource(uri, &self.registry, &self.checker).await?;

        let mut contents = ResourceContents::text(serde_json::to_string_pretty(&payload)?, uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(WEBSITE_MIME_TYPE.to_string());
        }

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

/// Pretty-printed JSON as a single text content item
fn text_result<T: Serialize>(value: &T) -> McpResult<CallToolResult> {
    let text = serde_json::to_string_pretty(value)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Check websites for llms.txt and llms-full.txt files and browse known websites."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(tools::tool_definitions()?))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.call_tool_by_name(&request.name, request.arguments.as_ref())
            .await
            .map_err(|e| {
                tracing::warn!(tool = %request.name, error = %e, "tool call failed");
                e.into()
            })
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(
            resources::list_website_resources(&self.registry),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        self.read_resource_by_uri(&request.uri).await.map_err(|e| {
            tracing::warn!(uri = %request.uri, error = %e, "resource read failed");
            e.into()
        })
    }
}
