//! The text of the HouseCall Pro MCP Server technical specification.
//!
//! Content is a static table of [`Section`]s. Rendering walks the table with
//! an [`Assembler`], inserting a page break between consecutive sections, and
//! never reads the clock: the only dates are the literals below.

use crate::assembler::{Assembler, TitleStyle};
use crate::error::Result;
use crate::model::{
    ContentBlock, DocumentProperties, DocumentTree, ListDefinition, ListFormat, StyleSheet,
};
use crate::theme::Theme;
use chrono::{TimeZone, Utc};

/// Default output file name of the generated document.
pub const DEFAULT_OUTPUT: &str = "HCP_MCP_Technical_Specification_v1.docx";

/// Running header text.
pub const DOCUMENT_TITLE: &str = "HouseCall Pro MCP Server — Technical Specification";

/// Stand-in for the API key wherever the document shows one.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_HOUSECALLPRO_API_KEY";

const BULLETS: &str = "bullet-list";
const NUMBERED: &str = "numbered-list";
const REQUIREMENTS: &str = "req-list";
const INSTALL: &str = "install-list";
const TESTS: &str = "test-list";

/// Theme color of a title-page line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Default run color
    Body,
    Accent,
    Subtle,
    Muted,
}

impl Tone {
    fn color(self, theme: &Theme) -> Option<String> {
        match self {
            Self::Body => None,
            Self::Accent => Some(theme.accent_color.clone()),
            Self::Subtle => Some(theme.subtle_color.clone()),
            Self::Muted => Some(theme.muted_color.clone()),
        }
    }
}

/// One entry of a section.
#[derive(Debug, Clone, Copy)]
pub enum Item {
    /// Empty paragraph with spacing before, in twips
    Spacer(u32),
    /// Centered title-page line
    Title {
        text: &'static str,
        size: u32,
        bold: bool,
        tone: Tone,
    },
    H1(&'static str),
    H2(&'static str),
    H3(&'static str),
    Para(&'static str),
    /// Bold label followed by a plain value
    Labeled(&'static str, &'static str),
    /// Code listing, one line per entry
    Code(&'static [&'static str]),
    /// Header row plus data rows; every second data row is shaded
    Table {
        widths: &'static [u32],
        header: &'static [&'static str],
        rows: &'static [&'static [&'static str]],
    },
    /// Items of one list reference
    List {
        reference: &'static str,
        items: &'static [&'static str],
    },
    /// Numbered step followed by its code lines
    Step {
        list: &'static str,
        text: &'static str,
        space_before: u32,
        code: &'static [&'static str],
    },
}

/// Items rendered on consecutive pages.
pub type Section = &'static [Item];

const fn step(text: &'static str, code: &'static [&'static str]) -> Item {
    Item::Step {
        list: INSTALL,
        text,
        space_before: 0,
        code,
    }
}

const TITLE_PAGE: Section = &[
    Item::Spacer(2000),
    Item::Title {
        text: "TECHNICAL SPECIFICATION",
        size: 28,
        bold: true,
        tone: Tone::Muted,
    },
    Item::Spacer(400),
    Item::Title {
        text: "HouseCall Pro MCP Server",
        size: 56,
        bold: true,
        tone: Tone::Accent,
    },
    Item::Spacer(200),
    Item::Title {
        text: "Model Context Protocol Integration for Claude Desktop",
        size: 26,
        bold: false,
        tone: Tone::Subtle,
    },
    Item::Spacer(800),
    Item::Title {
        text: "Version 1.0",
        size: 24,
        bold: false,
        tone: Tone::Body,
    },
    Item::Title {
        text: "January 12, 2026",
        size: 24,
        bold: false,
        tone: Tone::Body,
    },
    Item::Spacer(1200),
    Item::Title {
        text: "Prepared for: KIAPN (Koala Insulation of Atlanta North)",
        size: 22,
        bold: false,
        tone: Tone::Body,
    },
    Item::Title {
        text: "Classification: Internal Use",
        size: 22,
        bold: false,
        tone: Tone::Muted,
    },
];

const DOCUMENT_CONTROL: Section = &[
    Item::H1("1. Document Control"),
    Item::Table {
        widths: &[3000, 6360],
        header: &["Field", "Value"],
        rows: &[
            &["Document ID", "SPEC-HCP-MCP-001"],
            &["Version", "1.0"],
            &["Status", "Draft"],
            &["Author", "Claude (AI Assistant)"],
            &["Owner", "RFN Ventures"],
            &["Created", "2026-01-12"],
            &["Last Modified", "2026-01-12"],
        ],
    },
    Item::Spacer(300),
    Item::H2("1.1 Revision History"),
    Item::Table {
        widths: &[1500, 2000, 2500, 3360],
        header: &["Version", "Date", "Author", "Changes"],
        rows: &[&["1.0", "2026-01-12", "Claude", "Initial specification"]],
    },
];

const EXECUTIVE_SUMMARY: Section = &[
    Item::H1("2. Executive Summary"),
    Item::H2("2.1 Purpose"),
    Item::Para(
        "This specification defines the technical requirements for building a Model Context \
         Protocol (MCP) server that integrates HouseCall Pro CRM data with Claude Desktop. The \
         integration enables real-time access to sales pipeline, job profitability, and \
         operational metrics for EOS (Entrepreneurial Operating System) L10 meetings and \
         business operations.",
    ),
    Item::H2("2.2 Business Context"),
    Item::Para(
        "KIAPN is a residential insulation retrofit franchise implementing EOS methodology. \
         Current workflow requires manual PDF exports from HouseCall Pro to review business \
         metrics. This integration eliminates manual data extraction by providing Claude with \
         direct API access to CRM data.",
    ),
    Item::H2("2.3 Success Criteria"),
    Item::List {
        reference: BULLETS,
        items: &[
            "Claude can query HouseCall Pro data without manual exports",
            "L10 Scorecard metrics available in single tool call",
            "Close rate, pipeline value, and revenue calculated automatically",
            "Integration runs locally on owner's machine (no cloud hosting required)",
        ],
    },
];

const SYSTEM_ARCHITECTURE: Section = &[
    Item::H1("3. System Architecture"),
    Item::H2("3.1 Architecture Overview"),
    Item::Para("The system consists of three components communicating via standardized protocols:"),
    Item::Table {
        widths: &[2500, 3000, 3860],
        header: &["Component", "Technology", "Function"],
        rows: &[
            &["Claude Desktop", "Electron App", "User interface, MCP client"],
            &["MCP Server", "Python + FastMCP", "Protocol translation, business logic"],
            &["HouseCall Pro API", "REST API", "CRM data source"],
        ],
    },
    Item::Spacer(200),
    Item::H2("3.2 Data Flow"),
    Item::Code(&[
        "User Query → Claude Desktop → MCP Server → HouseCall Pro API → MCP Server → Claude \
         Desktop → Response",
    ]),
    Item::H2("3.3 Communication Protocols"),
    Item::Table {
        widths: &[3000, 3000, 3360],
        header: &["Interface", "Protocol", "Authentication"],
        rows: &[
            &["Claude ↔ MCP Server", "stdio (JSON-RPC)", "None (local process)"],
            &["MCP Server ↔ HCP API", "HTTPS REST", "Bearer Token"],
        ],
    },
];

const API_SPECIFICATION: Section = &[
    Item::H1("4. HouseCall Pro API Specification"),
    Item::H2("4.1 Authentication"),
    Item::Table {
        widths: &[3000, 6360],
        header: &["Parameter", "Value"],
        rows: &[
            &["Base URL", "https://api.housecallpro.com/v1"],
            &["Auth Type", "Bearer Token"],
            &["Header", "Authorization: Bearer {API_KEY}"],
            &["API Key", API_KEY_PLACEHOLDER],
            &["Plan Required", "MAX"],
        ],
    },
    Item::Spacer(200),
    Item::H2("4.2 Available Endpoints"),
    Item::Table {
        widths: &[2200, 2200, 2200, 2760],
        header: &["Endpoint", "Method", "Purpose", "Key Parameters"],
        rows: &[
            &["/customers", "GET", "List customers", "q, page, page_size"],
            &["/customers/{id}", "GET", "Single customer", "customer_id"],
            &["/estimates", "GET", "List estimates", "status, scheduled_start_min/max"],
            &["/estimates/{id}", "GET", "Single estimate", "estimate_id"],
            &["/jobs", "GET", "List jobs", "work_status, completed_at_min/max"],
            &["/jobs/{id}", "GET", "Single job", "job_id"],
            &["/employees", "GET", "List employees", "page, page_size"],
            &["/invoices", "GET", "List invoices", "status, created_at_min/max"],
        ],
    },
    Item::Spacer(200),
    Item::H2("4.3 Status Values"),
    Item::H3("4.3.1 Estimate Status"),
    Item::Para("pending | won | lost | expired"),
    Item::H3("4.3.2 Job Work Status"),
    Item::Para("scheduled | in_progress | complete | canceled"),
    Item::H3("4.3.3 Invoice Status"),
    Item::Para("draft | sent | paid | partial | void"),
];

const PARAMETER_HEADER: &[&str] = &["Parameter", "Type", "Description"];
const PARAMETER_WIDTHS: &[u32] = &[2500, 2500, 4360];

const CORE_DATA_TOOLS: Section = &[
    Item::H1("5. MCP Tool Specifications"),
    Item::H2("5.1 Core Data Tools"),
    Item::H3("5.1.1 get_customers"),
    Item::Table {
        widths: PARAMETER_WIDTHS,
        header: PARAMETER_HEADER,
        rows: &[
            &["page", "int", "Page number (default: 1)"],
            &["page_size", "int", "Results per page (default: 20, max: 200)"],
            &["q", "string?", "Search query for name, email, phone"],
        ],
    },
    Item::Spacer(200),
    Item::H3("5.1.2 get_estimates"),
    Item::Table {
        widths: PARAMETER_WIDTHS,
        header: PARAMETER_HEADER,
        rows: &[
            &["page", "int", "Page number (default: 1)"],
            &["page_size", "int", "Results per page (default: 50, max: 200)"],
            &["status", "string?", "Filter: pending | won | lost | expired"],
            &["scheduled_start_min", "ISO datetime?", "Estimates scheduled after this time"],
            &["scheduled_start_max", "ISO datetime?", "Estimates scheduled before this time"],
            &["created_at_min", "ISO datetime?", "Estimates created after this time"],
            &["created_at_max", "ISO datetime?", "Estimates created before this time"],
        ],
    },
    Item::Spacer(200),
    Item::H3("5.1.3 get_jobs"),
    Item::Table {
        widths: PARAMETER_WIDTHS,
        header: PARAMETER_HEADER,
        rows: &[
            &["page", "int", "Page number (default: 1)"],
            &["page_size", "int", "Results per page (default: 50, max: 200)"],
            &["work_status", "string?", "Filter: scheduled | in_progress | complete | canceled"],
            &["scheduled_start_min", "ISO datetime?", "Jobs scheduled after this time"],
            &["scheduled_start_max", "ISO datetime?", "Jobs scheduled before this time"],
            &["completed_at_min", "ISO datetime?", "Jobs completed after this time"],
            &["completed_at_max", "ISO datetime?", "Jobs completed before this time"],
        ],
    },
];

const REPORTING_TOOLS: Section = &[
    Item::H2("5.2 Compound Reporting Tools"),
    Item::H3("5.2.1 get_weekly_revenue"),
    Item::Para("Returns revenue from completed jobs for a specified week."),
    Item::Table {
        widths: PARAMETER_WIDTHS,
        header: PARAMETER_HEADER,
        rows: &[&["weeks_back", "int", "0 = current week, 1 = last week, etc."]],
    },
    Item::Spacer(100),
    Item::Labeled(
        "Returns: ",
        "{ week_start, week_end, total_revenue, job_count, jobs[] }",
    ),
    Item::Spacer(200),
    Item::H3("5.2.2 get_pipeline_value"),
    Item::Para("Returns total value of all pending estimates."),
    Item::Labeled("Parameters: ", "None"),
    Item::Labeled(
        "Returns: ",
        "{ total_pipeline_value, estimate_count, estimates[] }",
    ),
    Item::Spacer(200),
    Item::H3("5.2.3 get_close_rate"),
    Item::Para("Calculates win rate for a specified period."),
    Item::Table {
        widths: PARAMETER_WIDTHS,
        header: PARAMETER_HEADER,
        rows: &[&["days_back", "int", "Number of days to analyze (default: 30)"]],
    },
    Item::Spacer(100),
    Item::Labeled(
        "Returns: ",
        "{ close_rate_percent, won_count, lost_count, won_value, lost_value }",
    ),
    Item::Spacer(200),
    Item::H3("5.2.4 get_scheduled_jobs"),
    Item::Para("Returns jobs scheduled for upcoming period."),
    Item::Table {
        widths: PARAMETER_WIDTHS,
        header: PARAMETER_HEADER,
        rows: &[&["days_forward", "int", "Number of days ahead (default: 14)"]],
    },
    Item::Spacer(100),
    Item::Labeled("Returns: ", "{ total_scheduled_value, job_count, jobs[] }"),
    Item::Spacer(200),
    Item::H3("5.2.5 get_scorecard_metrics"),
    Item::Para(
        "Returns all key EOS Scorecard metrics in a single call. This is the primary tool for \
         L10 meeting preparation.",
    ),
    Item::Labeled("Parameters: ", "None"),
    Item::Spacer(100),
    Item::Para("Returns:"),
    Item::Table {
        widths: &[3500, 5860],
        header: &["Field", "Description"],
        rows: &[
            &["this_week_revenue", "Completed job revenue (current week)"],
            &["this_week_jobs", "Count of completed jobs (current week)"],
            &["last_week_revenue", "Completed job revenue (previous week)"],
            &["last_week_jobs", "Count of completed jobs (previous week)"],
            &["pipeline_value", "Total value of pending estimates"],
            &["pipeline_count", "Count of pending estimates"],
            &["close_rate_30d", "Win rate percentage (last 30 days)"],
            &["won_30d", "Count of won estimates (last 30 days)"],
            &["lost_30d", "Count of lost estimates (last 30 days)"],
            &["scheduled_value_14d", "Value of jobs scheduled (next 14 days)"],
            &["scheduled_jobs_14d", "Count of scheduled jobs (next 14 days)"],
        ],
    },
];

const IMPLEMENTATION: Section = &[
    Item::H1("6. Implementation Requirements"),
    Item::H2("6.1 Technology Stack"),
    Item::Table {
        widths: &[3000, 3000, 3360],
        header: &["Component", "Technology", "Version"],
        rows: &[
            &["Runtime", "Python", "3.10+"],
            &["MCP Framework", "FastMCP", "≥1.0.0"],
            &["HTTP Client", "httpx", "≥0.27.0"],
            &["Package Manager", "pip", "Latest"],
        ],
    },
    Item::Spacer(200),
    Item::H2("6.2 File Structure"),
    Item::Code(&[
        "housecallpro-mcp/",
        "├── server.py          # Main MCP server",
        "├── requirements.txt   # Python dependencies",
        "├── README.md          # Installation guide",
        "└── venv/              # Virtual environment",
    ]),
    Item::H2("6.3 Configuration"),
    Item::H3("6.3.1 Environment Variable"),
    Item::Code(&["HOUSECALLPRO_API_KEY=YOUR_HOUSECALLPRO_API_KEY"]),
    Item::Spacer(200),
    Item::H3("6.3.2 Claude Desktop Configuration"),
    Item::Para("Add to claude_desktop_config.json:"),
    Item::Code(&[
        "{",
        "  \"mcpServers\": {",
        "    \"housecallpro\": {",
        "      \"command\": \"/path/to/venv/bin/python\",",
        "      \"args\": [\"/path/to/server.py\"],",
        "      \"env\": {",
        "        \"HOUSECALLPRO_API_KEY\": \"YOUR_HOUSECALLPRO_API_KEY\"",
        "      }",
        "    }",
        "  }",
        "}",
    ]),
];

const INSTALLATION: Section = &[
    Item::H1("7. Installation Procedure"),
    Item::H2("7.1 Prerequisites"),
    Item::List {
        reference: BULLETS,
        items: &[
            "Python 3.10 or higher installed",
            "Claude Desktop installed and configured",
            "HouseCall Pro MAX plan (API access required)",
            "Terminal/Command line access",
        ],
    },
    Item::H2("7.2 Installation Steps"),
    Item::Step {
        list: INSTALL,
        text: "Create project directory:",
        space_before: 200,
        code: &["mkdir ~/housecallpro-mcp && cd ~/housecallpro-mcp"],
    },
    step("Create server.py with content from Appendix A", &[]),
    step("Create requirements.txt with content from Appendix B", &[]),
    step(
        "Create and activate virtual environment:",
        &[
            "python3 -m venv venv",
            "source venv/bin/activate  # macOS/Linux",
            "venv\\Scripts\\activate   # Windows",
        ],
    ),
    step("Install dependencies:", &["pip install -r requirements.txt"]),
    step(
        "Locate Claude Desktop config file:",
        &[
            "macOS: ~/Library/Application Support/Claude/claude_desktop_config.json",
            "Windows: %APPDATA%\\Claude\\claude_desktop_config.json",
        ],
    ),
    step("Add MCP server configuration (see Section 6.3.2)", &[]),
    step("Restart Claude Desktop", &[]),
];

const TESTING: Section = &[
    Item::H1("8. Testing & Validation"),
    Item::H2("8.1 Unit Tests"),
    Item::Table {
        widths: &[1500, 4000, 3860],
        header: &["Test ID", "Test Case", "Expected Result"],
        rows: &[
            &["T-001", "API connection with valid key", "HTTP 200, JSON response"],
            &["T-002", "API connection with invalid key", "HTTP 401 Unauthorized"],
            &["T-003", "get_customers returns data", "Array of customer objects"],
            &["T-004", "get_estimates with status filter", "Only matching status returned"],
            &["T-005", "get_jobs with date range", "Only jobs in range returned"],
            &["T-006", "get_scorecard_metrics", "All 11 metrics populated"],
        ],
    },
    Item::H2("8.2 Integration Tests"),
    Item::List {
        reference: TESTS,
        items: &[
            "In Claude Desktop, type: \"Pull my scorecard metrics\"",
            "Verify all metrics are returned with realistic values",
            "Type: \"What is my close rate for the last 30 days?\"",
            "Verify percentage matches manual calculation from HCP",
        ],
    },
    Item::H2("8.3 Acceptance Criteria"),
    Item::List {
        reference: BULLETS,
        items: &[
            "All unit tests pass",
            "Scorecard metrics match HCP dashboard within 5% tolerance",
            "Response time < 5 seconds for compound tools",
            "No API rate limit errors during normal use",
        ],
    },
];

const SECURITY: Section = &[
    Item::H1("9. Security Considerations"),
    Item::H2("9.1 API Key Protection"),
    Item::List {
        reference: BULLETS,
        items: &[
            "API key stored in Claude Desktop config, not in source code",
            "Config file should have restricted permissions (600)",
            "Never commit API key to version control",
            "Rotate key if compromised",
        ],
    },
    Item::H2("9.2 Data Access"),
    Item::Para(
        "The API key provides full read access to all HouseCall Pro data including: customer \
         PII (names, addresses, phone numbers, email), financial data (job amounts, invoices, \
         payments), and employee information. Treat with appropriate sensitivity.",
    ),
    Item::H2("9.3 Network Security"),
    Item::List {
        reference: BULLETS,
        items: &[
            "All API calls use HTTPS (TLS 1.2+)",
            "MCP server runs locally (no network exposure)",
            "No data persisted to disk by MCP server",
        ],
    },
];

const TROUBLESHOOTING: Section = &[
    Item::H1("10. Troubleshooting"),
    Item::Table {
        widths: &[3500, 5860],
        header: &["Symptom", "Resolution"],
        rows: &[
            &["Tool not appearing in Claude", "Check config path, restart Claude Desktop"],
            &["401 Unauthorized", "Verify API key, check HCP MAX plan status"],
            &["Connection timeout", "Check internet, verify api.housecallpro.com accessible"],
            &["Empty results", "Verify date ranges, check status filters"],
            &["Rate limit (429)", "Reduce query frequency, implement backoff"],
            &["Python not found", "Use full path to venv Python in config"],
        ],
    },
];

const APPENDIX_SERVER: Section = &[
    Item::H1("Appendix A: server.py"),
    Item::Para(
        "Complete source code for the MCP server. Create this file as \
         ~/housecallpro-mcp/server.py",
    ),
    Item::Spacer(200),
    Item::Para("[See attached file: server.py]"),
    Item::Para("File is provided as a separate attachment to this specification."),
];

const APPENDIX_REQUIREMENTS: Section = &[
    Item::H1("Appendix B: requirements.txt"),
    Item::Para("Python dependencies. Create this file as ~/housecallpro-mcp/requirements.txt"),
    Item::Spacer(200),
    Item::Code(&["mcp>=1.0.0", "httpx>=0.27.0"]),
];

const APPENDIX_CONFIG: Section = &[
    Item::H1("Appendix C: Claude Desktop Config Template"),
    Item::Para("Complete configuration example. Merge with existing config if present."),
    Item::Spacer(200),
    Item::Code(&[
        "{",
        "  \"mcpServers\": {",
        "    \"housecallpro\": {",
        "      \"command\": \"/Users/YOUR_USERNAME/housecallpro-mcp/venv/bin/python\",",
        "      \"args\": [\"/Users/YOUR_USERNAME/housecallpro-mcp/server.py\"],",
        "      \"env\": {",
        "        \"HOUSECALLPRO_API_KEY\": \"YOUR_HOUSECALLPRO_API_KEY\"",
        "      }",
        "    }",
        "  }",
        "}",
    ]),
    Item::Spacer(200),
    Item::Para("Replace YOUR_USERNAME with actual system username."),
    Item::Para(
        "On macOS, config location: ~/Library/Application \
         Support/Claude/claude_desktop_config.json",
    ),
    Item::Para("On Windows, config location: %APPDATA%\\Claude\\claude_desktop_config.json"),
];

const APPENDIX_QUICK_REFERENCE: Section = &[
    Item::H1("Appendix D: Quick Reference Commands"),
    Item::H2("D.1 Natural Language Queries"),
    Item::Table {
        widths: &[4500, 4860],
        header: &["User Says", "Tool Called"],
        rows: &[
            &["\"Pull my scorecard metrics\"", "get_scorecard_metrics()"],
            &["\"What's my close rate?\"", "get_close_rate(30)"],
            &["\"Show me the pipeline\"", "get_pipeline_value()"],
            &["\"Revenue this week\"", "get_weekly_revenue(0)"],
            &["\"Revenue last week\"", "get_weekly_revenue(1)"],
            &["\"What's scheduled next 2 weeks?\"", "get_scheduled_jobs(14)"],
            &["\"Find customer John Smith\"", "get_customers(q=\"John Smith\")"],
            &["\"Show pending estimates\"", "get_estimates(status=\"pending\")"],
        ],
    },
    Item::H2("D.2 EOS Scorecard Mapping"),
    Item::Table {
        widths: &[3500, 3000, 2860],
        header: &["Scorecard Metric", "Tool Field", "Target"],
        rows: &[
            &["Weekly Revenue", "this_week_revenue", "$25,000"],
            &["Pipeline Value", "pipeline_value", "$50,000+"],
            &["Close Rate", "close_rate_30d", "38%+ (national avg)"],
            &["Scheduled Revenue", "scheduled_value_14d", "$40,000+"],
        ],
    },
];

/// All sections in document order.
pub const SECTIONS: &[Section] = &[
    TITLE_PAGE,
    DOCUMENT_CONTROL,
    EXECUTIVE_SUMMARY,
    SYSTEM_ARCHITECTURE,
    API_SPECIFICATION,
    CORE_DATA_TOOLS,
    REPORTING_TOOLS,
    IMPLEMENTATION,
    INSTALLATION,
    TESTING,
    SECURITY,
    TROUBLESHOOTING,
    APPENDIX_SERVER,
    APPENDIX_REQUIREMENTS,
    APPENDIX_CONFIG,
    APPENDIX_QUICK_REFERENCE,
];

/// List definitions in registration order. Numbering IDs follow this order.
fn list_definitions(theme: &Theme) -> Vec<ListDefinition> {
    let indent = theme.list.indent_left;
    let hanging = theme.list.hanging;
    vec![
        ListDefinition::new(BULLETS, ListFormat::Bullet, indent, hanging),
        ListDefinition::new(NUMBERED, ListFormat::Decimal, indent, hanging),
        ListDefinition::new(REQUIREMENTS, ListFormat::Decimal, indent, hanging),
        ListDefinition::new(INSTALL, ListFormat::Decimal, indent, hanging),
        ListDefinition::new(TESTS, ListFormat::Decimal, indent, hanging),
    ]
}

fn properties() -> DocumentProperties {
    DocumentProperties {
        title: DOCUMENT_TITLE.to_string(),
        subject: "Model Context Protocol Integration for Claude Desktop".to_string(),
        creator: "RFN Ventures".to_string(),
        keywords: "HouseCall Pro, MCP, Claude Desktop, EOS".to_string(),
        created: Utc.with_ymd_and_hms(2026, 1, 12, 0, 0, 0).single(),
        revision: 1,
    }
}

/// Render one item into blocks appended to `tree`.
fn render_item(asm: &Assembler<'_>, item: &Item, tree: &mut DocumentTree) -> Result<()> {
    match *item {
        Item::Spacer(before) => tree.push(asm.spacer(before)),
        Item::Title {
            text,
            size,
            bold,
            tone,
        } => {
            let style = TitleStyle {
                size,
                bold,
                color: tone.color(asm.theme()),
            };
            tree.push(asm.title_line(text, &style))
        },
        Item::H1(text) => tree.push(asm.heading(1, text)?),
        Item::H2(text) => tree.push(asm.heading(2, text)?),
        Item::H3(text) => tree.push(asm.heading(3, text)?),
        Item::Para(text) => tree.push(asm.para(text)),
        Item::Labeled(label, value) => tree.push(asm.labeled_paragraph(label, value)),
        Item::Code(lines) => tree.extend(lines.iter().map(|line| asm.code_line(line))),
        Item::Table {
            widths,
            header,
            rows,
        } => {
            let mut table_rows = Vec::with_capacity(rows.len() + 1);
            table_rows.push(asm.table_header_row(header));
            for (index, &cells) in rows.iter().enumerate() {
                table_rows.push(asm.table_row(cells, index % 2 == 1));
            }
            tree.push(asm.table(widths, table_rows)?)
        },
        Item::List { reference, items } => {
            tree.extend(items.iter().map(|text| asm.list_item(reference, text)))
        },
        Item::Step {
            list,
            text,
            space_before,
            code,
        } => {
            let block = match asm.list_item(list, text) {
                ContentBlock::Paragraph(paragraph) if space_before > 0 => {
                    ContentBlock::Paragraph(paragraph.space_before(space_before))
                },
                other => other,
            };
            tree.push(block)?;
            tree.extend(code.iter().map(|line| asm.code_line(line)))
        },
    }
}

/// Build the complete specification document.
///
/// Pure and deterministic: equal themes give equal trees.
pub fn build_document(theme: &Theme) -> Result<DocumentTree> {
    let asm = Assembler::new(theme);
    let mut tree = DocumentTree::new(StyleSheet::from_theme(theme), theme.page.clone());

    for list in list_definitions(theme) {
        tree.add_list(list)?;
    }
    tree.set_header(asm.running_header(DOCUMENT_TITLE));
    tree.set_footer(asm.page_number_footer());
    tree.set_properties(properties());

    for (index, section) in SECTIONS.iter().enumerate() {
        if index > 0 {
            tree.push(asm.page_break())?;
        }
        for item in section.iter() {
            render_item(&asm, item, &mut tree)?;
        }
    }

    log::debug!(
        "Assembled {} blocks ({} headings, {} tables, {} page breaks)",
        tree.blocks().len(),
        tree.heading_count(),
        tree.table_count(),
        tree.page_break_count()
    );
    Ok(tree)
}
