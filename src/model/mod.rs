/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Request options shared by every call
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
