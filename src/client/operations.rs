//! GraphQL documents for every operation the client exposes.

/// Whether an operation reads or writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

/// A fixed GraphQL document and the top-level field holding its result.
#[derive(Debug)]
pub(crate) struct Operation {
    /// Operation name, sent as `operationName`.
    pub(crate) name: &'static str,
    /// Top-level response field.
    pub(crate) field: &'static str,
    pub(crate) kind: OperationKind,
    pub(crate) document: &'static str,
}

pub(crate) static LOGIN: Operation = Operation {
    name: "Login",
    field: "login",
    kind: OperationKind::Mutation,
    document: "mutation Login($input: LoginInput!) { login(input: $input) { accessToken refreshToken user { id name email emailVerified } } }",
};

pub(crate) static REGISTER: Operation = Operation {
    name: "Register",
    field: "register",
    kind: OperationKind::Mutation,
    document: "mutation Register($input: RegisterInput!) { register(input: $input) { user { id name email emailVerified } } }",
};

pub(crate) static REFRESH_TOKEN: Operation = Operation {
    name: "RefreshToken",
    field: "refreshToken",
    kind: OperationKind::Mutation,
    document: "mutation RefreshToken($token: String!) { refreshToken(token: $token) { accessToken } }",
};

pub(crate) static GOOGLE_AUTH: Operation = Operation {
    name: "GoogleAuth",
    field: "googleAuth",
    kind: OperationKind::Mutation,
    document: "mutation GoogleAuth($code: String!) { googleAuth(code: $code) { accessToken refreshToken user { id name email emailVerified } } }",
};

pub(crate) static SEND_OTP: Operation = Operation {
    name: "SendOTP",
    field: "sendOTP",
    kind: OperationKind::Mutation,
    document: "mutation SendOTP($input: SendOTPInput!) { sendOTP(input: $input) }",
};

pub(crate) static VERIFY_OTP: Operation = Operation {
    name: "VerifyOTP",
    field: "verifyOTP",
    kind: OperationKind::Mutation,
    document: "mutation VerifyOTP($input: VerifyOTPInput!) { verifyOTP(input: $input) }",
};

pub(crate) static GENERATE_API_KEY: Operation = Operation {
    name: "GenerateApiKey",
    field: "generateApiKey",
    kind: OperationKind::Mutation,
    document: "mutation GenerateApiKey { generateApiKey { id key createdAt } }",
};

pub(crate) static REVOKE_API_KEY: Operation = Operation {
    name: "RevokeApiKey",
    field: "revokeApiKey",
    kind: OperationKind::Mutation,
    document: "mutation RevokeApiKey($id: ID!) { revokeApiKey(id: $id) { id createdAt } }",
};

pub(crate) static API_KEYS: Operation = Operation {
    name: "ApiKeys",
    field: "apiKeys",
    kind: OperationKind::Query,
    document: "query ApiKeys { apiKeys { id createdAt } }",
};

pub(crate) static CREATE_URL: Operation = Operation {
    name: "CreateUrl",
    field: "createUrl",
    kind: OperationKind::Mutation,
    document: "mutation CreateUrl($input: CreateUrlInput!) { createUrl(input: $input) { id url shortUrl code image createdAt updatedAt } }",
};

pub(crate) static UPDATE_URL: Operation = Operation {
    name: "UpdateUrl",
    field: "updateUrl",
    kind: OperationKind::Mutation,
    document: "mutation UpdateUrl($input: UpdateUrlInput!) { updateUrl(input: $input) { id url shortUrl code image createdAt updatedAt } }",
};

pub(crate) static DELETE_URL: Operation = Operation {
    name: "DeleteUrl",
    field: "deleteUrl",
    kind: OperationKind::Mutation,
    document: "mutation DeleteUrl($id: ID!) { deleteUrl(id: $id) }",
};

pub(crate) static GET_URL: Operation = Operation {
    name: "GetUrl",
    field: "getUrl",
    kind: OperationKind::Query,
    document: "query GetUrl($id: ID, $code: String) { getUrl(id: $id, code: $code) { id url shortUrl code image createdAt updatedAt user { id name } } }",
};

pub(crate) static GET_URLS: Operation = Operation {
    name: "GetUrls",
    field: "getUrls",
    kind: OperationKind::Query,
    document: "query GetUrls($filter: UrlFilter, $pagination: Pagination) { getUrls(filter: $filter, pagination: $pagination) { data { id url shortUrl code image createdAt updatedAt } meta { total page pages limit } } }",
};

pub(crate) static GET_ALL_URLS: Operation = Operation {
    name: "GetAllUrls",
    field: "getAllUrls",
    kind: OperationKind::Query,
    document: "query GetAllUrls($filter: UrlFilter, $pagination: Pagination) { getAllUrls(filter: $filter, pagination: $pagination) { data { id url shortUrl code image createdAt updatedAt } meta { total page pages limit } } }",
};

pub(crate) static ME: Operation = Operation {
    name: "Me",
    field: "me",
    kind: OperationKind::Query,
    document: "query Me { me { id name email emailVerified roles { id name } } }",
};

pub(crate) static UPDATE_USER: Operation = Operation {
    name: "UpdateUser",
    field: "updateUser",
    kind: OperationKind::Mutation,
    document: "mutation UpdateUser($input: UpdateUserInput!) { updateUser(input: $input) { id name email emailVerified } }",
};

#[cfg(test)]
mod tests {
    use super::*;

    static ALL: [&Operation; 17] = [
        &LOGIN,
        &REGISTER,
        &REFRESH_TOKEN,
        &GOOGLE_AUTH,
        &SEND_OTP,
        &VERIFY_OTP,
        &GENERATE_API_KEY,
        &REVOKE_API_KEY,
        &API_KEYS,
        &CREATE_URL,
        &UPDATE_URL,
        &DELETE_URL,
        &GET_URL,
        &GET_URLS,
        &GET_ALL_URLS,
        &ME,
        &UPDATE_USER,
    ];

    #[test]
    fn test_documents_declare_their_name_and_kind() {
        for operation in ALL.iter() {
            let header = format!("{} {}", operation.kind.as_str(), operation.name);
            assert!(
                operation.document.starts_with(&header),
                "{} does not start with '{header}'",
                operation.name
            );
        }
    }

    #[test]
    fn test_documents_select_their_result_field() {
        for operation in ALL.iter() {
            assert!(
                operation.document.contains(&format!("{{ {}", operation.field)),
                "{} does not select {}",
                operation.name,
                operation.field
            );
        }
    }

    #[test]
    fn test_documents_have_balanced_braces() {
        for operation in ALL.iter() {
            let open = operation.document.matches('{').count();
            let close = operation.document.matches('}').count();
            assert_eq!(open, close, "{}", operation.name);
        }
    }
}
