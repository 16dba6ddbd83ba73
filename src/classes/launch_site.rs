//! `launch_site` - launch site codes and names.

define_class! {
    /// One launch site.
    LaunchSite, LaunchSiteField, "launch_site" {
        SiteCode => site_code: String = "SITE_CODE",
        /// Human-readable site name.
        SiteName => site_name: String = "LAUNCH_SITE",
    }
}
