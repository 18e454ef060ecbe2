make_str_enum! {
    Attr {
        Alt = "alt",
        AriaBusy = "aria-busy",
        AriaHidden = "aria-hidden",
        AriaLabel = "aria-label",
        AriaLive = "aria-live",
        DataLat = "data-lat",
        DataLng = "data-lng",
        DataMapStyle = "data-map-style",
        DataToast = "data-toast",
        DataZoom = "data-zoom",
        Href = "href",
        Id = "id",
        Loading = "loading",
        Rel = "rel",
        Role = "role",
        Selected = "selected",
        Src = "src",
        Title = "title",
        Type = "type",
        Value = "value",
    }
}
