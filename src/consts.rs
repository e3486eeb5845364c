//! Project-wide constants.

use std::time::Duration;

/// Stack that fronts the image submission API.
pub const SUBMIT_IMAGE_STACK: &str = "OpenDevOpsSubmitImage";

/// Output key holding the submission endpoint URL.
pub const SUBMIT_IMAGE_OUTPUT: &str = "SubmitImageAPI";

/// Stack that fronts the label lookup API.
pub const GET_IMAGE_LABEL_STACK: &str = "OpenDevOpsGetImageLabel";

/// Output key holding the label endpoint URL.
pub const GET_IMAGE_LABEL_OUTPUT: &str = "GetImageLabelAPI";

/// Query parameter carrying the image URL on submission.
pub const SUBMIT_QUERY_PARAM: &str = "url";

/// Query parameter carrying the image id on label lookup.
pub const LABEL_QUERY_PARAM: &str = "imageId";

/// A photo of a French bulldog, which the classifier also scores as pug and bull mastiff.
pub const SAMPLE_IMAGE_URL: &str = "https://i.ytimg.com/vi/iVZYAhzxG4Y/maxresdefault.jpg";

/// Labels the classifier must return for [`SAMPLE_IMAGE_URL`], checked in order.
pub const EXPECTED_LABELS: &[&str] = &["French bulldog", "pug", "bull mastiff"];

/// Time the backend is given to label a submitted image.
pub const LABEL_DELAY: Duration = Duration::from_secs(30);
