/// Image handling module
///
/// This module handles:
/// - Loading listing photos from http(s) or local URIs
/// - Downscaling them into card and profile thumbnails
/// - Re-encoding picked photos before they are uploaded

pub mod thumbnail;
pub mod upload;
