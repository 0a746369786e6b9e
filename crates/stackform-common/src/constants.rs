//! Provider identifiers and workspace-wide defaults.

/// Service principal allowed to assume function execution roles.
pub const FUNCTION_SERVICE_PRINCIPAL: &str = "lambda.amazonaws.com";

/// Service principal granted invoke permissions on routed functions.
pub const GATEWAY_SERVICE_PRINCIPAL: &str = "apigateway.amazonaws.com";

/// Invoke action granted to the gateway principal.
pub const INVOKE_FUNCTION_ACTION: &str = "lambda:InvokeFunction";

/// Read action granted to the content-delivery principal on site buckets.
pub const READ_OBJECT_ACTION: &str = "s3:GetObject";

/// Default runtime identifier for function declarations.
pub const DEFAULT_FUNCTION_RUNTIME: &str = "nodejs16.x";

/// Fixed hosted zone id of the content-delivery network's alias targets.
///
/// All distribution alias records point into this provider-owned zone.
pub const CDN_ALIAS_ZONE_ID: &str = "Z2FDTNDATAQYW2";

/// Table actions granted to function execution roles.
pub const TABLE_ACTIONS: &[&str] = &[
    "dynamodb:BatchGetItem",
    "dynamodb:BatchWriteItem",
    "dynamodb:TagResource",
    "dynamodb:UntagResource",
    "dynamodb:PutItem",
    "dynamodb:DeleteItem",
    "dynamodb:GetItem",
    "dynamodb:Scan",
    "dynamodb:Query",
    "dynamodb:UpdateItem",
];

/// Log actions granted to function execution roles.
pub const LOG_ACTIONS: &[&str] = &[
    "logs:CreateLogStream",
    "logs:CreateLogGroup",
    "logs:PutLogEvents",
];

/// Default path of the parameter override file read by the CLI.
pub const DEFAULT_PARAMS_FILE: &str = "stackform.params.yaml";

/// Application name used in CLI output.
pub const APP_NAME: &str = "stackform";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "sfm";
